use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    backend: String,
    store: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks the configured record store
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let backend = data.record_store.backend().to_string();

    match data.record_store.health_check().await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            backend,
            store: "ok",
        }),
        Err(e) => {
            warn!("Readiness check failed for {} store: {}", backend, e);
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                backend,
                store: "unhealthy",
            })
        }
    }
}
