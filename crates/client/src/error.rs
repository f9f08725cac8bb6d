//! API error taxonomy.

use serde::Deserialize;

/// Shown for failures the server gave no usable message for.
pub const GENERIC_API_ERROR: &str = "The request could not be completed. Please try again.";

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No bearer token; the call was never sent.
    #[error("not authenticated")]
    MissingToken,
    #[error("network error: {0}")]
    Network(String),
    #[error("the request timed out")]
    Timeout,
    /// Non-2xx response; `message` is the server's own error text when the
    /// body carried one.
    #[error("API error ({status})")]
    Remote { status: u16, message: Option<String> },
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text safe to surface to the user as-is.
    pub fn user_message(&self) -> &str {
        match self {
            ApiError::Remote {
                message: Some(message),
                ..
            } => message,
            ApiError::MissingToken => "Your session has expired. Please sign in again.",
            ApiError::Timeout => "The request timed out. Please try again.",
            _ => GENERIC_API_ERROR,
        }
    }
}

/// Error body shape the API uses for non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}

pub(crate) fn from_transport(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_message_is_passed_through() {
        let err = ApiError::Remote {
            status: 409,
            message: Some("Stock agotado".into()),
        };
        assert_eq!(err.user_message(), "Stock agotado");
    }

    #[test]
    fn messageless_failures_get_the_generic_text() {
        let err = ApiError::Remote {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), GENERIC_API_ERROR);
        assert_eq!(
            ApiError::Network("dns".into()).user_message(),
            GENERIC_API_ERROR
        );
    }

    #[test]
    fn error_body_accepts_message_or_error_keys() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"no stock"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("no stock"));
        let body: ErrorBody = serde_json::from_str(r#"{"error":"bad request"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("bad request"));
        let body: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.message.is_none());
    }
}
