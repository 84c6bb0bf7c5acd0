use serde::Deserialize;
use std::fmt;

/// Error body the backend attaches to every non-success response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Failure of a single API call, as seen from the client.
///
/// `Transport` covers fetch-level failures (the request never produced a
/// response); `Status` covers non-success HTTP responses, carrying the
/// backend's `error` message when the body had one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Transport(String),
    Status { status: u16, message: Option<String> },
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        ApiError::Transport(message.into())
    }

    /// Build an error from a non-success response's status and raw body.
    ///
    /// The body is expected to be `{"error": "..."}`; anything else (empty,
    /// HTML error page, missing field) leaves `message` unset so callers
    /// fall back to their own default.
    pub fn from_response_parts(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error);
        ApiError::Status { status, message }
    }

    /// The HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport(_) => None,
            ApiError::Status { status, .. } => Some(*status),
        }
    }

    /// Message to show the user: the server's own error text verbatim when
    /// present, otherwise the caller's action-specific fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(message) => write!(f, "request failed: {message}"),
            ApiError::Status {
                status,
                message: Some(message),
            } => write!(f, "HTTP {status}: {message}"),
            ApiError::Status {
                status,
                message: None,
            } => write!(f, "HTTP {status}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_response_parts_extracts_error_field() {
        let err = ApiError::from_response_parts(401, br#"{"error":"Invalid credentials"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 401,
                message: Some("Invalid credentials".to_string()),
            }
        );
    }

    #[test]
    fn from_response_parts_ignores_unparseable_body() {
        let err = ApiError::from_response_parts(500, b"<html>Internal Server Error</html>");
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: None,
            }
        );
    }

    #[test]
    fn from_response_parts_ignores_missing_error_field() {
        let err = ApiError::from_response_parts(400, br#"{"detail":"nope"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: None,
            }
        );
    }

    #[test]
    fn user_message_prefers_server_text() {
        let err = ApiError::from_response_parts(401, br#"{"error":"Invalid credentials"}"#);
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn user_message_falls_back_without_body() {
        let err = ApiError::from_response_parts(502, b"");
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn user_message_falls_back_on_transport_failure() {
        let err = ApiError::transport("connection refused");
        assert_eq!(
            err.user_message("Failed to submit report"),
            "Failed to submit report"
        );
    }

    #[test]
    fn status_accessor() {
        assert_eq!(ApiError::transport("x").status(), None);
        assert_eq!(ApiError::from_response_parts(403, b"").status(), Some(403));
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = ApiError::from_response_parts(403, br#"{"error":"Admin access required"}"#);
        assert_eq!(format!("{err}"), "HTTP 403: Admin access required");
        assert_eq!(
            format!("{}", ApiError::transport("timed out")),
            "request failed: timed out"
        );
    }
}
