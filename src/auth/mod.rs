//! Auth Module
//!
//! JWT issuing/verification, password hashing, and the request extractors
//! that gate authenticated and admin-only routes.

mod extract;
mod password;
mod token;

pub use extract::{AdminUser, AuthUser};
pub use password::{hash_password, verify_password};
pub use token::{AuthClaims, TokenProvider};
