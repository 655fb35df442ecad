//! Error types for Projectboard

use thiserror::Error;

/// Result type alias using Projectboard's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Projectboard error types
///
/// `ProjectNotFound` is the only domain failure; its display text travels
/// verbatim into 404 response bodies, so the wording is part of the API.
#[derive(Error, Debug)]
pub enum Error {
    // Domain errors
    #[error("Project with id '{0}' not found in database!")]
    ProjectNotFound(String),

    // Encoding errors, surfaced as 500 at the transport boundary
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_not_found_message() {
        let err = Error::ProjectNotFound("abc-123".to_string());
        assert_eq!(
            err.to_string(),
            "Project with id 'abc-123' not found in database!"
        );
    }

    #[test]
    fn test_serialization_error_from_serde() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json");
        let err: Error = bad.expect_err("Should fail to parse").into();
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
