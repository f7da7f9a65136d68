use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tracing::instrument;

/// Create test router
pub fn create_router() -> Router {
    Router::new().route("/hello", get(hello))
}

/// Root status endpoint
#[instrument]
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "AI实验报告评价系统API正在运行",
        "status": "healthy"
    }))
}

/// Test endpoint confirming the service is up
#[instrument]
async fn hello() -> Json<Value> {
    Json(json!({"message": "Hello from AI lab report evaluator!"}))
}
