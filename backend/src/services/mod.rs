//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod forecast;
pub mod user;

pub use forecast::ForecastService;
pub use user::UserService;
