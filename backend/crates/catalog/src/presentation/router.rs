//! Catalog Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::CatalogRepository;
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the Catalog router with PostgreSQL repository
///
/// Mounted by the app under `/api`.
pub fn catalog_router(repo: PgCatalogRepository) -> Router {
    catalog_router_generic(repo)
}

/// Create a generic Catalog router for any repository implementation
pub fn catalog_router_generic<C>(repo: C) -> Router
where
    C: CatalogRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/courses", get(handlers::list_courses::<C>))
        .with_state(state)
}
