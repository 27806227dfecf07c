//! Catalog Backend Module
//!
//! Read-only projection of courses and their lessons for the course
//! management page.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository trait
//! - `application/` - The course aggregation use case
//! - `infra/` - Database implementation
//! - `presentation/` - HTTP handler, DTOs, router
//!
//! The only algorithm in scope is the in-memory grouping of flat lesson
//! rows under their course: one pass keyed by course id, then a stable
//! per-group sort by lesson number.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::catalog_router;

#[cfg(test)]
mod tests;
