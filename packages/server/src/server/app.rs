//! Application setup and server configuration.

use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::{
        header::{CONTENT_TYPE, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use sqlx::migrate::Migrator;
use sqlx::PgPool;
use tokio::sync::OnceCell;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::AllowedOrigins;
use crate::server::routes::{create_jobs_batch, health_handler, index_handler, list_jobs};

/// Scrapers push large batches in one request.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Schema migrations embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    schema_ready: Arc<OnceCell<()>>,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        Self {
            db_pool,
            schema_ready: Arc::new(OnceCell::new()),
        }
    }

    /// Apply pending migrations once per process, before the first query
    /// that touches `job_postings`. A failed attempt leaves the cell empty,
    /// so the next request tries again.
    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        self.schema_ready
            .get_or_try_init(|| async {
                MIGRATOR.run(&self.db_pool).await?;
                tracing::info!("Database schema ready");
                Ok::<(), anyhow::Error>(())
            })
            .await?;
        Ok(())
    }
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, allowed_origins: &AllowedOrigins) -> Router {
    let app_state = AppState::new(pool);

    let api = Router::new()
        .route("/jobs", get(list_jobs))
        .route("/jobs/batch", post(create_jobs_batch));

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .nest("/api", api)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(Extension(app_state))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(allowed_origins: &AllowedOrigins) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    match allowed_origins {
        AllowedOrigins::Any => cors.allow_origin(Any),
        AllowedOrigins::List(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            cors.allow_origin(AllowOrigin::list(origins))
        }
    }
}
