use reqwest::StatusCode;
use thiserror::Error;

/// Chat gateway errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChatError {
    #[error("OpenAI API key not configured")]
    NotConfigured,

    #[error("Please enter a valid OpenAI API key (starts with sk-)")]
    InvalidApiKey,

    #[error("Message is empty")]
    EmptyMessage,

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ChatError {
    pub fn from_status(status: StatusCode, message: String) -> Self {
        let msg = if message.is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            message
        };

        match status {
            StatusCode::UNAUTHORIZED => ChatError::Unauthorized(msg),
            StatusCode::FORBIDDEN => ChatError::Unauthorized(msg),
            StatusCode::TOO_MANY_REQUESTS => ChatError::RateLimited(msg),
            StatusCode::BAD_REQUEST => ChatError::BadRequest(msg),
            status if status.is_server_error() => ChatError::ServerError(msg),
            status if status.is_client_error() => ChatError::BadRequest(msg),
            _ => ChatError::Unknown(msg),
        }
    }

    /// Whether resending the same request may succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ChatError::ServerError(_) | ChatError::NetworkError(_) | ChatError::RateLimited(_)
        )
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ChatError::InvalidResponse(err.to_string())
        } else {
            ChatError::NetworkError(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(
            ChatError::from_status(StatusCode::UNAUTHORIZED, String::new()),
            ChatError::Unauthorized("Unauthorized".to_string())
        );
        assert!(matches!(
            ChatError::from_status(StatusCode::BAD_GATEWAY, "upstream".to_string()),
            ChatError::ServerError(m) if m == "upstream"
        ));
        assert!(matches!(
            ChatError::from_status(StatusCode::UNPROCESSABLE_ENTITY, "x".to_string()),
            ChatError::BadRequest(_)
        ));
    }

    #[test]
    fn test_transient_errors() {
        assert!(ChatError::ServerError("x".into()).is_transient());
        assert!(ChatError::RateLimited("x".into()).is_transient());
        assert!(!ChatError::Unauthorized("x".into()).is_transient());
        assert!(!ChatError::NotConfigured.is_transient());
    }
}
