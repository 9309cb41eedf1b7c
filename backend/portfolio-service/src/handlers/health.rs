use crate::services::Storage;
use actix_web::{web, HttpResponse};

/// Service health; probes the store with a read.
pub async fn health_summary(storage: web::Data<dyn Storage>) -> HttpResponse {
    match storage.list_milestones().await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "portfolio-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => {
            tracing::error!("storage health probe failed: {}", e);
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "service": "portfolio-service"
            }))
        }
    }
}

pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}
