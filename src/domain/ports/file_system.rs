//! FileSystem port - abstraction over config file I/O
//!
//! Lets the save use case run against the local disk or an in-memory
//! double without knowing which.

use std::path::Path;

use crate::domain::value_objects::ContentHash;
use crate::error::LbResult;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - disk I/O with atomic replace
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Read file content, `None` when the file does not exist
    fn read(&self, path: &Path) -> LbResult<Option<String>>;

    /// Replace the file so readers see either the old or the new content
    fn write_atomic(&self, path: &Path, content: &str) -> LbResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;

    /// Content hash of the file, `None` when the file does not exist
    fn hash(&self, path: &Path) -> LbResult<Option<ContentHash>> {
        Ok(self
            .read(path)?
            .map(|content| ContentHash::from_content(&content)))
    }
}

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<
        std::sync::Mutex<std::collections::HashMap<std::path::PathBuf, String>>,
    >,
    pub writes: std::sync::Arc<std::sync::atomic::AtomicUsize>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> LbResult<Option<String>> {
        let files = self.files.lock().unwrap();
        Ok(files.get(path).cloned())
    }

    fn write_atomic(&self, path: &Path, content: &str) -> LbResult<()> {
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), content.to_string());
        self.writes
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(path)
    }
}
