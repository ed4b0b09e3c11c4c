//! Application services.

mod scaffold_service;

pub use scaffold_service::{ScaffoldService, ScaffoldReport};
