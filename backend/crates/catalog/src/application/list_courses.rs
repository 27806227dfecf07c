//! List Courses Use Case
//!
//! Loads the flat course and lesson rows and nests the lessons under
//! their course.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Course, CourseWithLessons, Lesson};
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;

/// List courses use case
pub struct ListCoursesUseCase<C>
where
    C: CatalogRepository,
{
    repo: Arc<C>,
}

impl<C> ListCoursesUseCase<C>
where
    C: CatalogRepository,
{
    pub fn new(repo: Arc<C>) -> Self {
        Self { repo }
    }

    /// Courses in display order, each with its lessons sorted ascending
    /// by lesson number
    pub async fn execute(&self) -> CatalogResult<Vec<CourseWithLessons>> {
        let courses = self.repo.list_courses().await?;

        // Nothing to attach; skip the lesson query entirely
        if courses.is_empty() {
            return Ok(Vec::new());
        }

        let lessons = self.repo.list_lessons().await?;

        Ok(group_lessons(courses, lessons))
    }
}

/// Attach lessons to their course
///
/// One pass builds the map keyed by course id, then every group is
/// stable-sorted by lesson number. The rows arrive ordered from the
/// query already; the re-sort keeps the invariant independent of
/// storage order. Lessons pointing at an unknown course are dropped.
pub(crate) fn group_lessons(
    courses: Vec<Course>,
    lessons: Vec<Lesson>,
) -> Vec<CourseWithLessons> {
    let mut by_course: HashMap<i64, Vec<Lesson>> = HashMap::new();
    for lesson in lessons {
        by_course.entry(lesson.course_id).or_default().push(lesson);
    }

    courses
        .into_iter()
        .map(|course| {
            let mut lessons = by_course.remove(&course.course_id).unwrap_or_default();
            lessons.sort_by_key(|lesson| lesson.lesson_number);

            CourseWithLessons { course, lessons }
        })
        .collect()
}
