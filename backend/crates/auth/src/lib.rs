//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, forms, views, router
//!
//! ## Features
//! - User registration with collected, localized field validation
//! - Login by login or email with a server-side session
//! - Server-side sessions referenced by an HMAC-signed cookie token
//! - Redirecting middleware for authenticated-only pages
//!
//! ## Security Model
//! - Passwords stored as a deterministic unsalted SHA-256 digest for
//!   compatibility with the existing account base (see DESIGN.md)
//! - Session cookies are HttpOnly; tokens are signed, not guessable
//! - Duplicate accounts rejected by storage uniqueness constraints

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
