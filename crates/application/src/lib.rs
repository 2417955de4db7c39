//! Application layer - Use cases and orchestration
//!
//! Holds the weather use cases and the port the infrastructure layer
//! implements to reach the upstream provider.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
