//! Authentication endpoints.

use gloo_net::http::Request;
use libris_shared::{BEARER_PREFIX, HEADER_AUTHORIZATION, LoginRequest, RegisterRequest, SessionUser};

use super::error::ApiError;
use super::{api_url, authorized};

pub struct AuthApi;

impl AuthApi {
    /// Identity of the current session (`GET /auth/me`).
    pub async fn me() -> Result<SessionUser, ApiError> {
        let url = api_url("/auth/me");
        let response = authorized(Request::get(&url)).send().await?;
        if !response.ok() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response.json::<SessionUser>().await?)
    }

    /// Credential login (`POST /auth/login-alt`). A successful login
    /// carries the bearer token in the `Authorization` response header;
    /// a 2xx without that header is still a failed login.
    pub async fn login(username: &str, password: &str) -> Result<String, ApiError> {
        let url = api_url("/auth/login-alt");
        let payload = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = Request::post(&url).json(&payload)?.send().await?;
        if !response.ok() {
            return Err(ApiError::from_response(response).await);
        }

        response
            .headers()
            .get(HEADER_AUTHORIZATION)
            .and_then(|header| header.strip_prefix(BEARER_PREFIX).map(str::to_string))
            .ok_or_else(|| {
                ApiError::Parse("login response did not include a bearer token".to_string())
            })
    }

    /// Account self-registration (`POST /auth/register`).
    pub async fn register(username: &str, password: &str) -> Result<(), ApiError> {
        let url = api_url("/auth/register");
        let payload = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = Request::post(&url).json(&payload)?.send().await?;
        if !response.ok() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(())
    }
}
