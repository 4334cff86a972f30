//! Notification endpoints. Read-only: the backend owns read/unread
//! bookkeeping.

use gloo_net::http::Request;
use libris_shared::Notification;

use super::error::ApiError;
use super::{api_url, authorized};

pub struct NotificationApi;

impl NotificationApi {
    pub async fn list() -> Result<Vec<Notification>, ApiError> {
        let url = api_url("/notification");
        let response = authorized(Request::get(&url)).send().await?;
        if !response.ok() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response.json::<Vec<Notification>>().await?)
    }

    pub async fn latest() -> Result<Vec<Notification>, ApiError> {
        let url = api_url("/notification/latest");
        let response = authorized(Request::get(&url)).send().await?;
        if !response.ok() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response.json::<Vec<Notification>>().await?)
    }
}
