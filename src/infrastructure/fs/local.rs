//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.
//!
//! Writes go to a temporary sibling of the target, are flushed to disk and
//! then renamed over the target. A reader of the target therefore sees the
//! complete old content or the complete new content, never a mix, and with
//! concurrent saves of the same path the last rename wins.
//!
//! The replacement keeps the permissions of the file it replaces. A new file
//! is created `0644`, since the proxy and its stats readers may run as
//! other users.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::ports::FileSystem;
use crate::error::{LbError, LbResult};

const TEMP_PREFIX: &str = ".lbforge-";
const TEMP_SUFFIX: &str = ".tmp";

#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    /// Write `content` next to `path` without replacing it yet
    ///
    /// The target is only touched by [`StagedWrite::commit`]. Dropping the
    /// stage removes the temporary file and leaves the target as it was.
    pub fn stage(&self, path: &Path, content: &str) -> LbResult<StagedWrite> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| LbError::persistence(path, e))?;

        let mut temp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(TEMP_SUFFIX)
            .tempfile_in(&dir)
            .map_err(|e| LbError::persistence(path, e))?;

        temp.write_all(content.as_bytes())
            .and_then(|()| copy_target_permissions(temp.as_file(), path))
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| LbError::persistence(path, e))?;

        Ok(StagedWrite {
            temp,
            target: path.to_path_buf(),
        })
    }
}

/// Give the temp file the target's mode, or `NEW_FILE_MODE` when there is no target
#[cfg(unix)]
fn copy_target_permissions(file: &File, target: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(target) {
        Ok(meta) => meta.permissions(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => fs::Permissions::from_mode(NEW_FILE_MODE),
        Err(e) => return Err(e),
    };
    file.set_permissions(permissions)
}

#[cfg(not(unix))]
fn copy_target_permissions(_file: &File, _target: &Path) -> io::Result<()> {
    Ok(())
}

/// Fully written and flushed content waiting to replace its target
#[derive(Debug)]
pub struct StagedWrite {
    temp: NamedTempFile,
    target: PathBuf,
}

impl StagedWrite {
    /// Path the content will replace
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Path of the temporary file holding the staged content
    pub fn temp_path(&self) -> &Path {
        self.temp.path()
    }

    /// Atomically rename the staged content over the target
    pub fn commit(self) -> LbResult<()> {
        let target = self.target;
        self.temp
            .persist(&target)
            .map_err(|e| LbError::persistence(&target, e.error))?;
        debug!(path = %target.display(), "replaced config file");
        Ok(())
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> LbResult<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_atomic(&self, path: &Path, content: &str) -> LbResult<()> {
        self.stage(path, content)?.commit()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
