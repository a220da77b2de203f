use async_graphql::*;

use crate::movies::MovieError;

/// Structured error builder for consistent error handling
pub struct StructuredError;

impl StructuredError {
    /// Translate a movie catalog failure into an execution error carrying
    /// the failure kind in its extensions.
    pub fn gateway(operation: &str, cause: MovieError) -> Error {
        let kind = cause.kind();
        Error::new(format!("Movie catalog error during {}: {}", operation, cause)).extend_with(
            |_, e| {
                e.set("code", "SERVICE_ERROR");
                e.set("service", "movie-catalog");
                e.set("kind", kind);
                e.set("operation", operation);
            },
        )
    }

    /// Create an "internal error"
    pub fn internal(message: impl Into<String>) -> Error {
        Error::new(message.into()).extend_with(|_, e| {
            e.set("code", "INTERNAL_ERROR");
        })
    }
}
