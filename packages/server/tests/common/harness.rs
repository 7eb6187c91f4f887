//! Test harness with testcontainers for integration testing.
//!
//! One Postgres container is shared by every test in the binary. Each test
//! gets its own freshly migrated database inside it, so listings and counts
//! never see rows written by another test.

use anyhow::{Context, Result};
use axum::Router;
use server_core::config::AllowedOrigins;
use server_core::server::{build_app, MIGRATOR};
use sqlx::PgPool;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;
use uuid::Uuid;

use super::ApiClient;

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    /// Base URL without a database name.
    server_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16-alpine")
            .with_cmd(["-c", "max_connections=200"])
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;

        Ok(Self {
            server_url: format!("postgresql://postgres:postgres@{}:{}", pg_host, pg_port),
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Per-test database plus the application router built on top of it.
///
/// ```ignore
/// #[tokio::test]
/// async fn my_test() {
///     let ctx = TestHarness::new().await.unwrap();
///     let response = ctx.api().get("/api/jobs").await;
/// }
/// ```
pub struct TestHarness {
    /// Database pool - use this for fixtures and direct assertions.
    pub db_pool: PgPool,
    pub app: Router,
}

impl TestHarness {
    /// Creates a new harness with an empty, migrated database.
    pub async fn new() -> Result<Self> {
        let ctx = Self::unmigrated().await?;
        MIGRATOR
            .run(&ctx.db_pool)
            .await
            .context("Failed to run migrations")?;
        Ok(ctx)
    }

    /// Creates a harness on a blank database, as a server sees it on its
    /// first cold start.
    pub async fn unmigrated() -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        let db_name = format!("jobs_test_{}", Uuid::new_v4().simple());
        let admin = PgPool::connect(&format!("{}/postgres", infra.server_url))
            .await
            .context("Failed to connect to Postgres")?;
        sqlx::query(&format!("CREATE DATABASE {}", db_name))
            .execute(&admin)
            .await
            .context("Failed to create test database")?;
        admin.close().await;

        let db_pool = PgPool::connect(&format!("{}/{}", infra.server_url, db_name))
            .await
            .context("Failed to connect to test database")?;

        let app = build_app(db_pool.clone(), &AllowedOrigins::Any);

        Ok(Self { db_pool, app })
    }

    /// Client that drives the router in-process.
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.app.clone())
    }
}
