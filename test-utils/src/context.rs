use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment owning the temporary directory and document paths.
///
/// The temporary directory (and every document inside it) is deleted when
/// the context is dropped, so each test starts from a clean filesystem.
pub struct TestContext {
    /// Temporary directory holding the seeded documents.
    pub dir: TempDir,
    /// Path of the seeded points document.
    pub points_path: PathBuf,
    /// Path of the seeded configuration document.
    pub config_path: PathBuf,
}

impl TestContext {
    /// Path for an additional document inside the test directory.
    ///
    /// The file is not created; use this for tests that exercise
    /// create-if-absent behavior.
    ///
    /// # Arguments
    /// - `file_name` - Name of the document file
    pub fn path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(file_name)
    }
}
