//! Authentication module
//!
//! Provides JWT session tokens with bcrypt password hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::AuthSession;
pub use password::PasswordService;
