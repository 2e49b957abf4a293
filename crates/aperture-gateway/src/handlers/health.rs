use crate::model::HealthResponse;
use axum::Json;

pub async fn index_handler() -> &'static str {
    "Aperture image gateway is running"
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
