use std::fs;
use std::path::{Path, PathBuf};

use crate::helpers::{TestError, TestErrorKind};

/// Scratch directory for word lists, configs and turn logs. Removed on drop.
#[derive(Debug)]
pub struct TempFileManager {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl TempFileManager {
    pub fn new() -> Result<Self, TestError> {
        let dir = tempfile::Builder::new()
            .prefix("bingo-test")
            .tempdir()
            .map_err(|e| {
                TestError::with_source(
                    TestErrorKind::FileOperationFailed,
                    "failed to create temporary directory",
                    e,
                )
            })?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_file(&self, name: &str, contents: &str) -> Result<PathBuf, TestError> {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TestError::with_source(
                    TestErrorKind::FileOperationFailed,
                    format!("failed to create {}", parent.display()),
                    e,
                )
            })?;
        }
        fs::write(&path, contents).map_err(|e| {
            TestError::with_source(
                TestErrorKind::FileOperationFailed,
                format!("failed to write {}", path.display()),
                e,
            )
        })?;
        Ok(path)
    }

    /// Write `count` distinct words, one per line.
    pub fn word_list(&self, name: &str, count: usize) -> Result<PathBuf, TestError> {
        let text: String = (0..count).map(|i| format!("word{:03}\n", i)).collect();
        self.create_file(name, &text)
    }
}
