use std::fmt;

use crate::domain::StoredParameter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    ParameterNotFound(String),
    AccessDenied(String),
    Throttled(String),
    InvalidRequest(String),
    RequestFailed(String),
}

impl StoreError {
    /// Not-found is the only failure the lookup recovers from.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ParameterNotFound(_))
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParameterNotFound(msg) => write!(f, "Parameter not found: {}", msg),
            Self::AccessDenied(msg) => write!(f, "Access denied: {}", msg),
            Self::Throttled(msg) => write!(f, "Request throttled: {}", msg),
            Self::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            Self::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read-only access to a parameter store, one exact key at a time
#[async_trait::async_trait]
pub trait ParameterStore: Send + Sync {
    async fn get_parameter(
        &self,
        name: &str,
        with_decryption: bool,
    ) -> Result<StoredParameter, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_not_found_is_recoverable() {
        assert!(StoreError::ParameterNotFound("/a".to_string()).is_not_found());
        assert!(!StoreError::Throttled("slow down".to_string()).is_not_found());
        assert!(!StoreError::AccessDenied("nope".to_string()).is_not_found());
        assert!(!StoreError::InvalidRequest("bad".to_string()).is_not_found());
        assert!(!StoreError::RequestFailed("io".to_string()).is_not_found());
    }

    #[test]
    fn test_display_includes_message() {
        let err = StoreError::Throttled("Rate exceeded".to_string());
        assert_eq!(err.to_string(), "Request throttled: Rate exceeded");
    }
}
