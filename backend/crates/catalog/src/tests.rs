//! Unit tests for the catalog crate
//!
//! The aggregation runs against a counting in-memory fake so the
//! "no lesson query when there are no courses" property is observable.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ListCoursesUseCase;
use crate::application::list_courses::group_lessons;
use crate::domain::entities::{Course, Lesson};
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::CourseResponse;

// ============================================================================
// In-memory fake
// ============================================================================

#[derive(Clone, Default)]
struct MemoryCatalog {
    courses: Vec<Course>,
    lessons: Vec<Lesson>,
    lesson_queries: Arc<AtomicUsize>,
}

impl MemoryCatalog {
    fn new(courses: Vec<Course>, lessons: Vec<Lesson>) -> Self {
        Self {
            courses,
            lessons,
            ..Self::default()
        }
    }

    fn lesson_query_count(&self) -> usize {
        self.lesson_queries.load(Ordering::SeqCst)
    }
}

impl CatalogRepository for MemoryCatalog {
    async fn list_courses(&self) -> CatalogResult<Vec<Course>> {
        Ok(self.courses.clone())
    }

    async fn list_lessons(&self) -> CatalogResult<Vec<Lesson>> {
        self.lesson_queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.lessons.clone())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn course(course_id: i64, level_code: &str, display_order: i32) -> Course {
    Course {
        course_id,
        level_code: level_code.to_string(),
        name: format!("JLPT {level_code}"),
        description: String::new(),
        display_order,
    }
}

fn lesson(lesson_id: i64, course_id: i64, lesson_number: i32, title: &str) -> Lesson {
    Lesson {
        lesson_id,
        course_id,
        lesson_number,
        title: title.to_string(),
        summary: String::new(),
    }
}

// ============================================================================
// Use case
// ============================================================================

mod list_courses_tests {
    use super::*;

    #[tokio::test]
    async fn empty_catalog_skips_lesson_query() {
        let repo = MemoryCatalog::new(vec![], vec![]);
        let use_case = ListCoursesUseCase::new(Arc::new(repo.clone()));

        let result = use_case.execute().await.unwrap();

        assert!(result.is_empty());
        assert_eq!(repo.lesson_query_count(), 0);
    }

    #[tokio::test]
    async fn courses_keep_display_order() {
        let repo = MemoryCatalog::new(
            vec![course(1, "N5", 1), course(2, "N4", 2), course(3, "N3", 3)],
            vec![],
        );
        let use_case = ListCoursesUseCase::new(Arc::new(repo.clone()));

        let result = use_case.execute().await.unwrap();

        let codes: Vec<&str> = result
            .iter()
            .map(|c| c.course.level_code.as_str())
            .collect();
        assert_eq!(codes, vec!["N5", "N4", "N3"]);
        assert_eq!(repo.lesson_query_count(), 1);
    }

    #[tokio::test]
    async fn course_without_lessons_gets_empty_list() {
        let repo = MemoryCatalog::new(
            vec![course(1, "N5", 1), course(2, "N4", 2)],
            vec![lesson(10, 1, 1, "Lesson 1: Hiragana Basics")],
        );
        let use_case = ListCoursesUseCase::new(Arc::new(repo));

        let result = use_case.execute().await.unwrap();

        assert_eq!(result[0].lessons.len(), 1);
        assert!(result[1].lessons.is_empty());
    }
}

// ============================================================================
// Grouping
// ============================================================================

mod grouping_tests {
    use super::*;

    #[test]
    fn lessons_sorted_regardless_of_storage_order() {
        let courses = vec![course(1, "N5", 1)];
        // Deliberately shuffled
        let lessons = vec![
            lesson(3, 1, 3, "three"),
            lesson(1, 1, 1, "one"),
            lesson(2, 1, 2, "two"),
        ];

        let result = group_lessons(courses, lessons);

        let numbers: Vec<i32> = result[0].lessons.iter().map(|l| l.lesson_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn every_lesson_appears_under_its_course() {
        let courses = vec![course(1, "N5", 1), course(2, "N4", 2), course(3, "N3", 3)];
        let mut lessons = Vec::new();
        for course_id in 1..=3i64 {
            for number in (1..=5i32).rev() {
                lessons.push(lesson(
                    course_id * 100 + i64::from(number),
                    course_id,
                    number,
                    "lesson",
                ));
            }
        }
        let total = lessons.len();

        let result = group_lessons(courses, lessons);

        let regrouped: usize = result.iter().map(|c| c.lessons.len()).sum();
        assert_eq!(regrouped, total);
        for grouped in &result {
            assert!(
                grouped
                    .lessons
                    .iter()
                    .all(|l| l.course_id == grouped.course.course_id)
            );
            assert!(
                grouped
                    .lessons
                    .windows(2)
                    .all(|w| w[0].lesson_number < w[1].lesson_number),
                "lessons must be strictly ascending"
            );
        }
    }

    #[test]
    fn lesson_for_unknown_course_is_dropped() {
        let courses = vec![course(1, "N5", 1)];
        let lessons = vec![lesson(1, 1, 1, "kept"), lesson(2, 99, 1, "orphan")];

        let result = group_lessons(courses, lessons);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].lessons.len(), 1);
        assert_eq!(result[0].lessons[0].title, "kept");
    }
}

// ============================================================================
// DTO shape
// ============================================================================

mod dto_tests {
    use super::*;

    #[test]
    fn response_uses_camel_case_and_keeps_empty_lessons() {
        let grouped = group_lessons(
            vec![course(7, "N5", 1)],
            vec![lesson(1, 7, 1, "Lesson 1: Hiragana Basics")],
        );
        let response: Vec<CourseResponse> =
            grouped.into_iter().map(CourseResponse::from).collect();

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json[0]["id"], 7);
        assert_eq!(json[0]["levelCode"], "N5");
        assert_eq!(json[0]["lessons"][0]["lessonNumber"], 1);
        assert_eq!(json[0]["lessons"][0]["title"], "Lesson 1: Hiragana Basics");

        let empty = group_lessons(vec![course(8, "N4", 2)], vec![]);
        let response: Vec<CourseResponse> = empty.into_iter().map(CourseResponse::from).collect();
        let json = serde_json::to_value(&response).unwrap();

        assert!(json[0]["lessons"].as_array().unwrap().is_empty());
    }
}
