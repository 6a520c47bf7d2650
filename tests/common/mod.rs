//! Common test utilities for artcp integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A file-layout repository fixture for integration tests
#[allow(dead_code)]
pub struct TestRepo {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the repository root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestRepo {
    /// Create a new empty repository
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file under the repository root
    pub fn write_file(&self, relative: &str, contents: &str) {
        let file_path = self.path.join(relative);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, contents).expect("Failed to write file");
    }

    /// Place an artifact using the default (nested) layout
    pub fn put_default(&self, group: &str, artifact: &str, version: &str, ext: &str) {
        let dir = format!("{}/{}/{}", group.replace('.', "/"), artifact, version);
        self.write_file(
            &format!("{}/{}-{}.{}", dir, artifact, version, ext),
            &format!("{}-{}", artifact, version),
        );
    }

    /// Place an artifact at the repository root (flat layout)
    pub fn put_flat(&self, artifact: &str, version: &str, ext: &str) {
        self.write_file(
            &format!("{}-{}.{}", artifact, version, ext),
            &format!("{}-{}", artifact, version),
        );
    }

    /// Repository specification string with the flat layout
    pub fn flat_spec(&self, id: &str) -> String {
        format!("{}::flat::{}", id, self.path.display())
    }

    /// Repository specification string with the default layout
    pub fn default_spec(&self, id: &str) -> String {
        format!("{}::default::{}", id, self.path.display())
    }

    /// Check if a file exists under the repository root
    pub fn file_exists(&self, relative: &str) -> bool {
        self.path.join(relative).exists()
    }

    /// Read a file from under the repository root
    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path.join(relative)).expect("Failed to read file")
    }
}
