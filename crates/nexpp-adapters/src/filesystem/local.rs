//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write as _};
use std::path::Path;

use tracing::trace;

use nexpp_core::{NexppResult, application::ports::Filesystem};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> NexppResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_file(&self, path: &Path) -> NexppResult<()> {
        std::fs::File::create(path)
            .map(|_| ())
            .map_err(|e| map_io_error(path, e, "create file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> NexppResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn append_file(&self, path: &Path, content: &str) -> NexppResult<()> {
        let append = || -> io::Result<()> {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            file.write_all(content.as_bytes())
        };
        append().map_err(|e| map_io_error(path, e, "append to file"))
    }

    fn create_symlink(&self, origin: &Path, destination: &Path) -> NexppResult<()> {
        symlink(origin, destination)
            .map_err(|e| map_io_error(destination, e, "create symlink"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(unix)]
fn symlink(origin: &Path, destination: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(origin, destination)
}

#[cfg(windows)]
fn symlink(origin: &Path, destination: &Path) -> io::Result<()> {
    if origin.is_dir() {
        std::os::windows::fs::symlink_dir(origin, destination)
    } else {
        std::os::windows::fs::symlink_file(origin, destination)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> nexpp_core::NexppError {
    use nexpp_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
