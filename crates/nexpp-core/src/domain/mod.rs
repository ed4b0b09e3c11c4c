//! Domain layer: pure types and logic with no I/O.
//!
//! Everything here is a deterministic computation over in-memory values.
//! The only side effect any domain function is allowed is a `tracing` event.

pub mod config;
pub mod error;
pub mod manifest;
pub mod value_objects;

pub use config::{Notice, ParseOutcome, ProjectConfig, RawOptions};
pub use error::DomainError;
pub use value_objects::{AppMode, Library, Standard};
