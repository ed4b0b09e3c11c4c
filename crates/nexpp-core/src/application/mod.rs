//! Application layer: use-case orchestration over the domain.
//!
//! The domain computes; this layer sequences those computations and talks
//! to the outside world exclusively through the ports in [`ports`].

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::ScaffoldService;
