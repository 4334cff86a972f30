//! Ingestion-source endpoints.
//!
//! Sources are a small bounded set, so the backend serves them without
//! pagination and without a bulk-delete endpoint; this client keeps that
//! asymmetry instead of pretending the paginated surface exists.

use gloo_net::http::Request;
use libris_shared::{Source, SourceCreateRequest};

use super::error::ApiError;
use super::resource::ResourceClient;
use super::{api_url, authorized};

const BASE: &str = "/source";

fn client() -> ResourceClient<Source, Source, SourceCreateRequest> {
    ResourceClient::new(BASE)
}

pub struct SourceApi;

impl SourceApi {
    /// The full source list (`GET /source`, unpaginated).
    pub async fn list() -> Result<Vec<Source>, ApiError> {
        let url = api_url(BASE);
        let response = authorized(Request::get(&url)).send().await?;
        if !response.ok() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response.json::<Vec<Source>>().await?)
    }

    pub async fn get(id: &str) -> Result<Source, ApiError> {
        client().get(id).await
    }

    pub async fn create(payload: &SourceCreateRequest) -> Result<Source, ApiError> {
        client().create(payload).await
    }

    pub async fn update(id: &str, payload: &SourceCreateRequest) -> Result<Source, ApiError> {
        client().update(id, payload).await
    }

    pub async fn delete(id: &str) -> Result<(), ApiError> {
        client().delete(id).await
    }
}
