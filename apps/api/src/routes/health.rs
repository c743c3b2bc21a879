use axum::Json;
use serde_json::{json, Value};

/// GET /test
/// Returns a JSON test message.
pub async fn test_handler() -> Json<Value> {
    Json(json!({ "message": "Hello, World!" }))
}
