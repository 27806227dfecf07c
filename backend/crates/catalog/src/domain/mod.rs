//! Domain Layer

pub mod entities;
pub mod repository;

pub use entities::{Course, CourseWithLessons, Lesson};
pub use repository::CatalogRepository;
