//! API DTOs (Data Transfer Objects)

use serde::Serialize;

use crate::domain::entities::{CourseWithLessons, Lesson};

/// One course in the `GET /api/courses` response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: i64,
    pub level_code: String,
    pub name: String,
    pub description: String,
    /// Always present, `[]` when the course has no lessons yet
    pub lessons: Vec<LessonResponse>,
}

/// One lesson card
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonResponse {
    pub lesson_number: i32,
    pub title: String,
    pub summary: String,
}

impl From<CourseWithLessons> for CourseResponse {
    fn from(course: CourseWithLessons) -> Self {
        Self {
            id: course.course.course_id,
            level_code: course.course.level_code,
            name: course.course.name,
            description: course.course.description,
            lessons: course.lessons.into_iter().map(LessonResponse::from).collect(),
        }
    }
}

impl From<Lesson> for LessonResponse {
    fn from(lesson: Lesson) -> Self {
        Self {
            lesson_number: lesson.lesson_number,
            title: lesson.title,
            summary: lesson.summary,
        }
    }
}
