use actix_web::HttpResponse;
use serde_json::json;

use super::items::Repo;

/// GET /health/live
#[utoipa::path(
    get,
    path = "/health/live",
    responses((status = 200, description = "Process is up")),
    tag = "health"
)]
pub async fn live() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "Healthy" }))
}

/// GET /health/ready
///
/// Ready only while the item store answers a ping.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Item store reachable"),
        (status = 503, description = "Item store unreachable"),
    ),
    tag = "health"
)]
pub async fn ready(repo: Repo) -> HttpResponse {
    match repo.ping().await {
        Ok(()) => HttpResponse::Ok().json(json!({ "status": "Healthy" })),
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({ "status": "Unhealthy" }))
        }
    }
}
