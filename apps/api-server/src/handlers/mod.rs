//! HTTP handlers and route configuration.

mod health;
mod recipes;


use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult, json_error_handler};

/// Configure all application routes.
///
/// Unknown methods on known paths answer like unknown paths, with a 404.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Public routes
        .route("/", web::get().to(health::health_check))
        // Recipe routes
        .service(
            web::scope("/api/v1/recipes")
                .service(
                    web::resource("")
                        .route(web::post().to(recipes::create_recipe))
                        .route(web::get().to(recipes::list_recipes))
                        .default_service(web::to(route_not_found)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(recipes::get_recipe))
                        .route(web::put().to(recipes::update_recipe))
                        .route(web::delete().to(recipes::delete_recipe))
                        .default_service(web::to(route_not_found)),
                ),
        );
}

/// Fallback for anything no route matched.
pub async fn route_not_found() -> AppResult<HttpResponse> {
    Err(AppError::RouteNotFound)
}
