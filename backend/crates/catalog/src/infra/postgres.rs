//! PostgreSQL Repository Implementation

use sqlx::PgPool;

use crate::domain::entities::{Course, Lesson};
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;

/// PostgreSQL-backed catalog repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CatalogRepository for PgCatalogRepository {
    async fn list_courses(&self) -> CatalogResult<Vec<Course>> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT
                course_id,
                level_code,
                name,
                description,
                display_order
            FROM courses
            ORDER BY display_order, course_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CourseRow::into_course).collect())
    }

    async fn list_lessons(&self) -> CatalogResult<Vec<Lesson>> {
        let rows = sqlx::query_as::<_, LessonRow>(
            r#"
            SELECT
                lesson_id,
                course_id,
                lesson_number,
                title,
                summary
            FROM lessons
            ORDER BY course_id, lesson_number
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(LessonRow::into_lesson).collect())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct CourseRow {
    course_id: i64,
    level_code: String,
    name: String,
    description: String,
    display_order: i32,
}

impl CourseRow {
    fn into_course(self) -> Course {
        Course {
            course_id: self.course_id,
            level_code: self.level_code,
            name: self.name,
            description: self.description,
            display_order: self.display_order,
        }
    }
}

#[derive(sqlx::FromRow)]
struct LessonRow {
    lesson_id: i64,
    course_id: i64,
    lesson_number: i32,
    title: String,
    summary: String,
}

impl LessonRow {
    fn into_lesson(self) -> Lesson {
        Lesson {
            lesson_id: self.lesson_id,
            course_id: self.course_id,
            lesson_number: self.lesson_number,
            title: self.title,
            summary: self.summary,
        }
    }
}
