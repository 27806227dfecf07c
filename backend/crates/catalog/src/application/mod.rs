//! Application Layer

pub mod list_courses;

pub use list_courses::ListCoursesUseCase;
