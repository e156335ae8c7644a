use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the persistent document store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The document exists on disk but cannot be parsed.
    ///
    /// There is no automatic recovery; the error must surface to the
    /// operator so the file can be inspected or restored.
    #[error("Document {path} is corrupt: {source}")]
    Corrupt {
        /// Path of the unparseable document
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The document failed to serialize before a save.
    #[error("Failed to encode document {path}: {source}")]
    Encode {
        /// Path of the document being saved
        path: PathBuf,
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem failure while reading or replacing the document.
    #[error("I/O failure on document {path}: {source}")]
    Io {
        /// Path of the document being accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
