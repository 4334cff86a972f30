//! Generic CRUD accessor shared by the paginated catalog entities.

use std::marker::PhantomData;

use gloo_net::http::Request;
use libris_shared::Page;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::{api_url, authorized};

/// One HTTP operation per call against a single resource base path.
///
/// `S` is the row shape of the paginated listing, `D` the full record of
/// `get`, and `P` the create/update payload. Author and Genre instantiate
/// the whole surface; Source keeps its own smaller client because the
/// backend exposes it without pagination or bulk delete.
///
/// There are no retries and no idempotency keys: a duplicate submit during
/// a slow network produces a duplicate server-side record, which is why
/// callers disable the triggering control while a call is in flight.
pub struct ResourceClient<S, D, P> {
    base: &'static str,
    _marker: PhantomData<fn() -> (S, D, P)>,
}

impl<S, D, P> ResourceClient<S, D, P>
where
    S: DeserializeOwned,
    D: DeserializeOwned,
    P: Serialize,
{
    pub const fn new(base: &'static str) -> Self {
        Self {
            base,
            _marker: PhantomData,
        }
    }

    /// Fetch one page of rows, optionally filtered by name.
    pub async fn page(&self, page: u32, size: u32, name: &str) -> Result<Page<S>, ApiError> {
        let url = api_url(&format!(
            "{}?page={}&size={}&name={}",
            self.base,
            page,
            size,
            urlencoding::encode(name)
        ));
        let response = authorized(Request::get(&url)).send().await?;
        if !response.ok() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response.json::<Page<S>>().await?)
    }

    pub async fn get(&self, id: &str) -> Result<D, ApiError> {
        let url = api_url(&format!("{}/{}", self.base, id));
        let response = authorized(Request::get(&url)).send().await?;
        if !response.ok() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response.json::<D>().await?)
    }

    pub async fn create(&self, payload: &P) -> Result<D, ApiError> {
        let url = api_url(self.base);
        let response = authorized(Request::post(&url)).json(payload)?.send().await?;
        if !response.ok() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response.json::<D>().await?)
    }

    pub async fn update(&self, id: &str, payload: &P) -> Result<D, ApiError> {
        let url = api_url(&format!("{}/{}", self.base, id));
        let response = authorized(Request::put(&url)).json(payload)?.send().await?;
        if !response.ok() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response.json::<D>().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = api_url(&format!("{}/{}", self.base, id));
        let response = authorized(Request::delete(&url)).send().await?;
        if !response.ok() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(())
    }

    /// Bulk delete by id list (`POST {base}/delete`).
    pub async fn delete_many(&self, ids: &[String]) -> Result<(), ApiError> {
        let url = api_url(&format!("{}/delete", self.base));
        let response = authorized(Request::post(&url)).json(&ids)?.send().await?;
        if !response.ok() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(())
    }

    /// Multipart catalog import attributed to an ingestion source. The
    /// server interprets the file; the client only sees success/failure.
    pub async fn upload(
        &self,
        source_id: &str,
        form: web_sys::FormData,
    ) -> Result<String, ApiError> {
        let url = api_url(&format!("{}/upload/{}", self.base, source_id));
        let response = authorized(Request::post(&url)).body(form)?.send().await?;
        if !response.ok() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response.text().await?)
    }
}
