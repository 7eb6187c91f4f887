use axum::Json;
use serde_json::{json, Value};

/// Service banner with the endpoint map.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "name": "Job Aggregator API",
        "status": "running",
        "endpoints": {
            "health": "GET /health",
            "listJobs": "GET /api/jobs?page=&limit=&tag=&search=",
            "ingestBatch": "POST /api/jobs/batch",
        }
    }))
}
