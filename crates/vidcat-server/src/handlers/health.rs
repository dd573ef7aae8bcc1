//! Health endpoint.

use axum::Json;
use serde_json::{json, Value};

/// Liveness check. Does not touch the gateway.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "YouTube API Server is running"
    }))
}
