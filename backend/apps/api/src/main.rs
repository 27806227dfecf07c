//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; application-level errors use the
//! feature-crate error types and `kernel::error::AppError`.

mod config;
mod pages;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::middleware::{AuthMiddlewareState, require_session};
use auth::{AuthConfig, PgAuthRepository, auth_router};
use axum::{Router, middleware, routing::get};
use catalog::{PgCatalogRepository, catalog_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::pages::{PagesState, SiteViews};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let auth_config = config.auth_config()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(config.database.connect_options())
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired sessions
    // Errors here should not prevent server startup
    let auth_repo = PgAuthRepository::new(pool.clone());
    match auth_repo.cleanup_expired().await {
        Ok(sessions) => {
            tracing::info!(sessions_deleted = sessions, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session cleanup failed, continuing anyway");
        }
    }

    let catalog_repo = PgCatalogRepository::new(pool.clone());

    let app = build_router(&config, auth_config, auth_repo, catalog_repo);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.listen_port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(
    config: &AppConfig,
    auth_config: AuthConfig,
    auth_repo: PgAuthRepository,
    catalog_repo: PgCatalogRepository,
) -> Router {
    let pages_state = PagesState {
        views: Arc::new(SiteViews::new()),
        repo: Arc::new(auth_repo.clone()),
        auth_config: Arc::new(auth_config.clone()),
    };

    let public_pages = Router::new()
        .route("/", get(pages::home))
        .route("/course-management", get(pages::course_management))
        .route("/contact", get(pages::contact))
        .with_state(pages_state.clone());

    // Profile and settings require a live session; the middleware
    // redirects everyone else to /register.
    let mw_state = AuthMiddlewareState {
        repo: pages_state.repo.clone(),
        config: pages_state.auth_config.clone(),
    };
    let protected_pages = Router::new()
        .route("/profile", get(pages::profile))
        .route("/settings", get(pages::settings))
        .with_state(pages_state)
        .layer(middleware::from_fn(move |req, next| {
            require_session(mw_state.clone(), req, next)
        }));

    public_pages
        .merge(protected_pages)
        .merge(auth_router(auth_repo, auth_config))
        .nest("/api", catalog_router(catalog_repo))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(TraceLayer::new_for_http())
}
