//! Transport error type shared by all resource clients.

use serde::Deserialize;

/// Any failure originating from the network/HTTP layer.
///
/// Pages convert these into page-level banners; dialogs keep themselves
/// open and show the message inline. Client-side validation errors are a
/// separate concern and never reach this type.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    Network(String),
    /// The server answered with a non-2xx status. `message` is the
    /// conventional `{"message": …}` error-body field when present,
    /// otherwise a generic fallback.
    Status { status: u16, message: String },
    /// The response arrived but did not decode into the expected shape.
    Parse(String),
}

impl ApiError {
    /// The 404 specialization, rendered as a page-level "Not found" state
    /// instead of an alert.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    /// Build a `Status` error from a failed response, extracting the
    /// server-supplied message when one is present.
    pub(crate) async fn from_response(response: gloo_net::http::Response) -> Self {
        let status = response.status();
        let message = match response.text().await {
            Ok(body) => extract_message(&body),
            Err(_) => None,
        }
        .unwrap_or_else(|| format!("Request failed with status {status}"));
        ApiError::Status { status, message }
    }
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Status { message, .. } => f.write_str(message),
            ApiError::Parse(msg) => write!(f, "Unexpected response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            gloo_net::Error::JsError(e) => ApiError::Network(e.to_string()),
            gloo_net::Error::GlooError(msg) => ApiError::Network(msg),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pull the human-readable message out of a conventional error body.
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()?
        .message
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_conventional_message() {
        assert_eq!(
            extract_message(r#"{"message": "Author name already taken"}"#),
            Some("Author name already taken".to_string())
        );
    }

    #[test]
    fn falls_back_on_malformed_bodies() {
        assert_eq!(extract_message("<html>502</html>"), None);
        assert_eq!(extract_message(""), None);
        assert_eq!(extract_message(r#"{"message": "  "}"#), None);
        assert_eq!(extract_message(r#"{"error": "nope"}"#), None);
    }

    #[test]
    fn not_found_is_a_status_specialization() {
        let err = ApiError::Status {
            status: 404,
            message: "Request failed with status 404".into(),
        };
        assert!(err.is_not_found());

        let err = ApiError::Status {
            status: 500,
            message: "boom".into(),
        };
        assert!(!err.is_not_found());
        assert!(!ApiError::Network("offline".into()).is_not_found());
    }
}
