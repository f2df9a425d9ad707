// ============================================================================
// ERRORS - Errores de la capa de datos (API / storage)
// ============================================================================
// La navegación no tiene errores; todo lo que falla aquí termina como un
// mensaje String en FetchState::error.
// ============================================================================

use thiserror::Error;

/// Error surfaced by the data / auth collaborators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response; `message` is the backend's own message when it sent one
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Http { status, message: format!("HTTP {}", status) }
        } else {
            Self::Http { status, message }
        }
    }

    /// 401/403 from the backend or a missing token
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::Http { status: 401 | 403, .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_backend_message_verbatim() {
        let err = ApiError::http(422, "Email already registered");
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn http_error_without_body_falls_back_to_status() {
        assert_eq!(ApiError::http(502, "  ").to_string(), "HTTP 502");
    }

    #[test]
    fn auth_failures_are_detected() {
        assert!(ApiError::Unauthenticated.is_auth_failure());
        assert!(ApiError::http(401, "expired").is_auth_failure());
        assert!(!ApiError::NotFound("Item".into()).is_auth_failure());
        assert_eq!(ApiError::NotFound("Item".into()).to_string(), "Item not found");
    }
}
