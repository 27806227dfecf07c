//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::ListCoursesUseCase;
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::CourseResponse;

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<C>
where
    C: CatalogRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<C>,
}

/// GET /api/courses
pub async fn list_courses<C>(
    State(state): State<CatalogAppState<C>>,
) -> CatalogResult<Json<Vec<CourseResponse>>>
where
    C: CatalogRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCoursesUseCase::new(state.repo.clone());

    let courses = use_case.execute().await?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}
