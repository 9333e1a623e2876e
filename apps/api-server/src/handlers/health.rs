//! Health check endpoint.

use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    pub version: &'static str,
}

/// Health check endpoint - returns server status.
///
/// GET /
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        success: true,
        message: "Recipe App API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
