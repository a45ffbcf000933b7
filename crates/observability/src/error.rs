//! Error types for observability setup.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// The global tracing subscriber could not be installed (usually because
    /// one is already set).
    #[error("failed to initialize tracing: {0}")]
    InitFailed(String),
}
