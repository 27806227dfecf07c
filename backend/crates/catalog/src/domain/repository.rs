//! Repository Trait

use crate::domain::entities::{Course, Lesson};
use crate::error::CatalogResult;

/// Catalog repository trait
#[trait_variant::make(CatalogRepository: Send)]
pub trait LocalCatalogRepository {
    /// All courses ordered by (display_order, course_id)
    async fn list_courses(&self) -> CatalogResult<Vec<Course>>;

    /// All lessons ordered by (course_id, lesson_number)
    async fn list_lessons(&self) -> CatalogResult<Vec<Lesson>>;
}
