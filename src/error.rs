//! Error handling for melon orders

use crate::orders::models::{CategoryKind, MAX_MELONS};

/// Order error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("No more than {max} melons! (requested {requested})")]
    TooManyMelons { requested: u32, max: u32 },

    #[error("International orders require a country code")]
    MissingCountryCode,

    #[error("Cannot {operation} on a {category} order")]
    CapabilityMismatch {
        operation: &'static str,
        category: CategoryKind,
    },

    #[error("Invalid configuration for {key}: {message}")]
    Config { key: String, message: String },
}

impl OrderError {
    pub(crate) fn too_many(requested: u32) -> Self {
        OrderError::TooManyMelons {
            requested,
            max: MAX_MELONS,
        }
    }

    /// Input rejected while building an order
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            OrderError::TooManyMelons { .. } | OrderError::MissingCountryCode
        )
    }

    /// Category-specific operation called on the wrong category
    pub fn is_capability_mismatch(&self) -> bool {
        matches!(self, OrderError::CapabilityMismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_message() {
        let err = OrderError::too_many(101);
        assert_eq!(err.to_string(), "No more than 100 melons! (requested 101)");
        assert!(err.is_validation());
        assert!(!err.is_capability_mismatch());
    }

    #[test]
    fn test_capability_mismatch_message() {
        let err = OrderError::CapabilityMismatch {
            operation: "mark inspection",
            category: CategoryKind::Domestic,
        };
        assert_eq!(err.to_string(), "Cannot mark inspection on a domestic order");
        assert!(err.is_capability_mismatch());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_config_error_is_neither() {
        let err = OrderError::Config {
            key: "MELON_LOG_JSON".to_string(),
            message: "expected true or false".to_string(),
        };
        assert!(err.to_string().contains("MELON_LOG_JSON"));
        assert!(!err.is_validation());
        assert!(!err.is_capability_mismatch());
    }
}
