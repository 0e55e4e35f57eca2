use thiserror::Error;

/// Failure of an outbound news or model call, classified so the chat loop can
/// report it and keep going.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    #[error("quota exceeded ({status}): {message}")]
    Quota { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("API error ({status}): {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    /// Map a non-success HTTP status and its body to an error variant.
    pub fn classify_status(status: u16, body: impl Into<String>) -> Self {
        let message = body.into();
        match status {
            401 | 403 => ApiError::Auth { status, message },
            // Gemini rejects a bad key with 400 rather than 401
            400 if message.contains("API_KEY_INVALID") => ApiError::Auth { status, message },
            429 => ApiError::Quota { status, message },
            _ => ApiError::Http { status, message },
        }
    }

    /// A key that was never configured surfaces as an auth failure at call time.
    pub fn missing_key(var: &str) -> Self {
        ApiError::Auth {
            status: 0,
            message: format!("{var} is not set"),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs carry API keys in their query string
        let err = err.without_url();
        if err.is_decode() {
            ApiError::MalformedResponse(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::classify_status(status.as_u16(), err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedResponse(err.to_string())
    }
}
