//! Forecast Gateway Shared Library
//!
//! Request/response types and error kinds used by the backend and by
//! API clients.

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
