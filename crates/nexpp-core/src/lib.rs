//! Nexpp Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Nexpp
//! C++ project scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           nexpp-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (Driven: Filesystem)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     nexpp-adapters (Infrastructure)     │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectConfig, Standard, manifest)    │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use nexpp_core::domain::config::{self, RawOptions};
//! use nexpp_core::domain::manifest;
//!
//! let raw = RawOptions {
//!     name: Some("Demo".into()),
//!     standard: Some("17".into()),
//!     flags: true,
//!     ..RawOptions::default()
//! };
//!
//! let outcome = config::parse(raw).expect("valid options");
//! let cmake = manifest::render(&outcome.config);
//! assert!(cmake.contains("project(Demo)"));
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Flat re-exports so downstream crates don't need deep paths.
pub use application::{ApplicationError, ScaffoldService, ports::Filesystem};
pub use domain::{
    DomainError,
    config::{Notice, ParseOutcome, ProjectConfig, RawOptions},
    value_objects::{AppMode, Library, Standard},
};
pub use error::{NexppError, NexppResult};
