//! Catalog Entities
//!
//! Courses and lessons are read-only rows from the application's
//! perspective; there are no write endpoints in scope.

/// A proficiency-level course (e.g. N5)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub course_id: i64,
    /// Short level label (unique), also the tab identity on the page
    pub level_code: String,
    pub name: String,
    pub description: String,
    /// Explicit ordering; ties broken by course_id
    pub display_order: i32,
}

/// An ordered unit of content within a course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub lesson_id: i64,
    pub course_id: i64,
    /// Unique within the course, defines the presentation order
    pub lesson_number: i32,
    pub title: String,
    pub summary: String,
}

/// A course carrying its lessons, sorted ascending by lesson number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseWithLessons {
    pub course: Course,
    pub lessons: Vec<Lesson>,
}
