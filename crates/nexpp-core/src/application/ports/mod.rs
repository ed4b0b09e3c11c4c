//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `nexpp-adapters` implement
//! these.
//!
//! The only driven port is [`Filesystem`]: every disk mutation the scaffold
//! service performs goes through it, so the core itself never touches
//! `std::fs` and stays fully testable in memory.

use std::path::Path;

use crate::error::NexppResult;

/// Side-effecting filesystem operations the core calls but does not
/// implement.
pub trait Filesystem {
    /// Create a directory, including any missing parents. Succeeds if the
    /// directory already exists.
    fn create_dir_all(&self, path: &Path) -> NexppResult<()>;

    /// Create an empty file, truncating any existing content.
    fn create_file(&self, path: &Path) -> NexppResult<()>;

    /// Write content to a file, truncating any existing content.
    fn write_file(&self, path: &Path, content: &str) -> NexppResult<()>;

    /// Append content to a file, creating it if missing.
    fn append_file(&self, path: &Path, content: &str) -> NexppResult<()>;

    /// Create a symbolic link at `destination` pointing to `origin`.
    fn create_symlink(&self, origin: &Path, destination: &Path) -> NexppResult<()>;

    /// Whether a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}
