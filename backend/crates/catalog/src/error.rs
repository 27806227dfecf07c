//! Catalog Error Types
//!
//! The read path has no expected business failures: anything that goes
//! wrong is infrastructure. Full detail is logged server-side; the
//! response body carries only a generic, user-safe message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// User-safe message for any catalog failure
pub const CATALOG_UNAVAILABLE: &str = "Не вдалося завантажити курси. Спробуйте пізніше.";

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InternalServerError
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), CATALOG_UNAVAILABLE)
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Catalog read failed");

        // No partial results, no internal detail on the wire
        let err = self.to_app_error();
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(serde_json::json!({ "message": err.message() }))).into_response()
    }
}
