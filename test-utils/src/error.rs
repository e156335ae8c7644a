use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to create the temporary directory or write a document.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failed to serialize a seeded document.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
