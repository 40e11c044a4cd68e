use std::fmt;

/// Custom error type for Flow Manager client operations
///
/// Remote rejections are not errors: they stay in the `FmResponse`
/// descriptor with their status code and raw body. Only local failures
/// (bad payloads, incomplete settings, unreadable topology files) surface
/// through this type.
#[derive(Debug)]
pub enum FmError {
    /// Required entity payload absent or empty; no request was made
    Validation(String),
    /// Connection settings incomplete or HTTP client construction failed
    Config(String),
    /// Topology descriptor could not be read or parsed
    Topology(String),
    /// JSON shaping error
    Json(String),
}

impl fmt::Display for FmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FmError::Validation(msg) => write!(f, "Validation error: {}", msg),
            FmError::Config(msg) => write!(f, "Configuration error: {}", msg),
            FmError::Topology(msg) => write!(f, "Topology error: {}", msg),
            FmError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for FmError {}

impl From<serde_json::Error> for FmError {
    fn from(err: serde_json::Error) -> Self {
        FmError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for FmError {
    fn from(err: serde_yml::Error) -> Self {
        FmError::Topology(err.to_string())
    }
}

impl From<std::io::Error> for FmError {
    fn from(err: std::io::Error) -> Self {
        FmError::Topology(err.to_string())
    }
}

/// Result type alias for Flow Manager operations
pub type Result<T> = std::result::Result<T, FmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = FmError::Validation("didn't get any path properties".to_string());
        assert!(err.to_string().contains("Validation error"));
        assert!(err.to_string().contains("path properties"));
    }

    #[test]
    fn test_config_error_display() {
        let err = FmError::Config("can't find property ip".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("ip"));
    }

    #[test]
    fn test_topology_error_display() {
        let err = FmError::Topology("no such file".to_string());
        assert!(err.to_string().contains("Topology error"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: FmError = json_err.into();
        match err {
            FmError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected FmError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "topology.yml not found");
        let err: FmError = io_err.into();
        match err {
            FmError::Topology(msg) => assert!(msg.contains("topology.yml")),
            _ => panic!("Expected FmError::Topology"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        // Verify FmError is Send + Sync for async usage
        assert_send_sync::<FmError>();
    }
}
