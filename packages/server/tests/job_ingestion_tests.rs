//! Integration tests for `POST /api/jobs/batch`.

mod common;

use crate::common::{job, minimal_job, TestHarness};
use axum::http::StatusCode;
use serde_json::json;
use server_core::domains::jobs::JobPosting;

#[tokio::test]
async fn single_job_is_inserted_then_updated() {
    let ctx = TestHarness::new().await.unwrap();
    let api = ctx.api();
    let batch = json!([minimal_job("x1")]);

    let first = api.post_json("/api/jobs/batch", &batch).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.get("message"), json!("Batch processed"));
    assert_eq!(first.u64("inserted"), 1);
    assert_eq!(first.u64("updated"), 0);

    let second = api.post_json("/api/jobs/batch", &batch).await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.u64("inserted"), 0);
    assert_eq!(second.u64("updated"), 1);
}

#[tokio::test]
async fn replaying_a_batch_is_idempotent() {
    let ctx = TestHarness::new().await.unwrap();
    let api = ctx.api();
    let batch = json!([
        job("yc-1", "Backend Engineer", "Acme Corp"),
        job("yc-2", "Frontend Engineer", "Globex"),
        job("yc-3", "Data Engineer", "Initech"),
    ]);

    let first = api.post_json("/api/jobs/batch", &batch).await;
    assert_eq!((first.u64("inserted"), first.u64("updated")), (3, 0));

    let second = api.post_json("/api/jobs/batch", &batch).await;
    assert_eq!((second.u64("inserted"), second.u64("updated")), (0, 3));

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job_postings")
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(stored, 3);
}

#[tokio::test]
async fn shared_external_id_keeps_the_last_title() {
    let ctx = TestHarness::new().await.unwrap();
    let api = ctx.api();

    let response = api
        .post_json(
            "/api/jobs/batch",
            &json!([
                job("dup", "First Title", "Acme Corp"),
                job("dup", "Second Title", "Acme Corp"),
            ]),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!((response.u64("inserted"), response.u64("updated")), (1, 1));

    let stored = JobPosting::find_by_external_id("dup", &ctx.db_pool)
        .await
        .unwrap()
        .expect("posting should exist");
    assert_eq!(stored.title, "Second Title");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job_postings WHERE external_id = 'dup'")
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn reingestion_replaces_every_field() {
    let ctx = TestHarness::new().await.unwrap();
    let api = ctx.api();

    let mut original = job("r1", "Rust Engineer", "Ferrous Systems");
    original["salary"] = json!("$150k");
    original["tags"] = json!(["Rust", "Go"]);
    api.post_json("/api/jobs/batch", &json!([original])).await;

    let mut replacement = job("r1", "Senior Rust Engineer", "Ferrous Systems");
    replacement["remote"] = json!(true);
    replacement["tags"] = json!(["Go", "Rust", "Kubernetes"]);
    api.post_json("/api/jobs/batch", &json!([replacement])).await;

    let stored = JobPosting::find_by_external_id("r1", &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.title, "Senior Rust Engineer");
    assert!(stored.remote);
    assert_eq!(stored.salary, None);
    assert_eq!(stored.tags, vec!["Go", "Rust", "Kubernetes"]);
    assert!(stored.active);
}

#[tokio::test]
async fn active_false_in_payload_hides_the_posting() {
    let ctx = TestHarness::new().await.unwrap();
    let api = ctx.api();

    api.post_json("/api/jobs/batch", &json!([job("gone", "Closed Role", "Acme Corp")]))
        .await;
    assert_eq!(api.get("/api/jobs").await.u64("total"), 1);

    let mut closed = job("gone", "Closed Role", "Acme Corp");
    closed["active"] = json!(false);
    let response = api.post_json("/api/jobs/batch", &json!([closed])).await;
    assert_eq!(response.u64("updated"), 1);

    let listing = api.get("/api/jobs").await;
    assert_eq!(listing.u64("total"), 0);
    assert_eq!(listing.get("jobs"), json!([]));
}

#[tokio::test]
async fn empty_batch_reports_zero_effect() {
    let ctx = TestHarness::new().await.unwrap();

    let response = ctx.api().post_json("/api/jobs/batch", &json!([])).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.get("message"), json!("No jobs to process"));
    assert_eq!((response.u64("inserted"), response.u64("updated")), (0, 0));
}

#[tokio::test]
async fn non_array_body_is_a_client_error() {
    let ctx = TestHarness::new().await.unwrap();
    let api = ctx.api();

    let object = api
        .post_json("/api/jobs/batch", &minimal_job("x1"))
        .await;
    assert_eq!(object.status, StatusCode::BAD_REQUEST);
    assert_eq!(object.get("message"), json!("Payload must be an array of jobs"));

    let garbage = api
        .post_raw("/api/jobs/batch", "application/json", "not json".to_string())
        .await;
    assert_eq!(garbage.status, StatusCode::BAD_REQUEST);

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job_postings")
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(stored, 0);
}

#[tokio::test]
async fn missing_external_id_rejects_whole_batch() {
    let ctx = TestHarness::new().await.unwrap();

    let mut anonymous = minimal_job("ignored");
    anonymous.as_object_mut().unwrap().remove("externalId");

    let response = ctx
        .api()
        .post_json("/api/jobs/batch", &json!([minimal_job("ok"), anonymous]))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.get("message");
    assert!(message.as_str().unwrap().contains("index 1"), "{message}");

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job_postings")
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(stored, 0);
}

#[tokio::test]
async fn store_failure_is_a_generic_server_error() {
    let ctx = TestHarness::new().await.unwrap();
    sqlx::query("DROP TABLE job_postings")
        .execute(&ctx.db_pool)
        .await
        .unwrap();

    let response = ctx
        .api()
        .post_json("/api/jobs/batch", &json!([minimal_job("x1")]))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.get("message"), json!("Internal Server Error"));
}

#[tokio::test]
async fn batch_spanning_several_insert_chunks_counts_every_row() {
    let ctx = TestHarness::new().await.unwrap();
    let api = ctx.api();
    let batch = json!((0..1001)
        .map(|i| minimal_job(&format!("bulk-{i}")))
        .collect::<Vec<_>>());

    let first = api.post_json("/api/jobs/batch", &batch).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!((first.u64("inserted"), first.u64("updated")), (1001, 0));

    let second = api.post_json("/api/jobs/batch", &batch).await;
    assert_eq!((second.u64("inserted"), second.u64("updated")), (0, 1001));

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job_postings")
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(stored, 1001);
}

#[tokio::test]
async fn body_over_the_size_limit_is_payload_too_large() {
    let ctx = TestHarness::new().await.unwrap();
    let padding = " ".repeat(50 * 1024 * 1024);

    let response = ctx
        .api()
        .post_raw("/api/jobs/batch", "application/json", format!("[{padding}]"))
        .await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.get("message"), json!("Payload too large"));
}

#[tokio::test]
async fn first_request_on_a_blank_database_creates_the_schema() {
    let ctx = TestHarness::unmigrated().await.unwrap();
    let api = ctx.api();

    let listing = api.get("/api/jobs").await;
    assert_eq!(listing.status, StatusCode::OK);
    assert_eq!(listing.u64("total"), 0);

    let ingested = api
        .post_json("/api/jobs/batch", &json!([minimal_job("cold-1")]))
        .await;
    assert_eq!(ingested.status, StatusCode::OK);
    assert_eq!(ingested.u64("inserted"), 1);

    let stored = JobPosting::find_by_external_id("cold-1", &ctx.db_pool)
        .await
        .unwrap();
    assert!(stored.is_some());
}
