use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Simple status object with the service name and version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "folio",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
