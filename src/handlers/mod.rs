use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::utils::response::success;

pub mod assistant;
pub mod dashboard;
pub mod events;
pub mod proposals;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "eventpro-api",
    };

    success(payload, "Health check successful").into_response()
}
