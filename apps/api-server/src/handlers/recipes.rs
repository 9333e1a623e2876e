//! Recipe CRUD handlers.

use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;

use larder_core::domain::RecipeId;
use larder_core::pagination::{Page, PageRequest};
use larder_core::validate_recipe;
use larder_shared::dto::ListQuery;
use larder_shared::{ApiResponse, PaginationInfo};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/recipes
pub async fn create_recipe(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let fields = validate_recipe(&body)?;

    let recipe = state
        .recipes
        .create(fields)
        .await
        .map_err(AppError::storage("Error creating recipe"))?;

    tracing::info!(recipe_id = %recipe.id, "Recipe created");

    Ok(HttpResponse::Created().json(ApiResponse::ok(recipe, "Recipe created successfully")))
}

/// GET /api/v1/recipes?page=&limit=
///
/// Unparseable paging values fall back to page 1 of 10 rather than failing.
pub async fn list_recipes(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .unwrap_or_default();
    let query = ListQuery::from_pairs(pairs);
    let request = PageRequest::from_query(query.page.as_deref(), query.limit.as_deref());

    let page = state
        .recipes
        .list(request)
        .await
        .map_err(AppError::storage("Error retrieving recipes"))?;

    let pagination = pagination_info(&page);
    Ok(HttpResponse::Ok().json(
        ApiResponse::ok(page.items, "Recipes retrieved successfully").with_pagination(pagination),
    ))
}

/// GET /api/v1/recipes/{id}
pub async fn get_recipe(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = RecipeId::parse(&path)?;

    let recipe = state
        .recipes
        .find_by_id(&id)
        .await
        .map_err(AppError::storage("Error retrieving recipe"))?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(recipe, "Recipe retrieved successfully")))
}

/// PUT /api/v1/recipes/{id}
///
/// The id is checked before the body.
pub async fn update_recipe(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let id = RecipeId::parse(&path)?;
    let fields = validate_recipe(&body)?;

    let recipe = state
        .recipes
        .update_by_id(&id, fields)
        .await
        .map_err(AppError::storage("Error updating recipe"))?
        .ok_or(AppError::NotFound)?;

    tracing::info!(recipe_id = %recipe.id, "Recipe updated");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(recipe, "Recipe updated successfully")))
}

/// DELETE /api/v1/recipes/{id}
pub async fn delete_recipe(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = RecipeId::parse(&path)?;

    let recipe = state
        .recipes
        .delete_by_id(&id)
        .await
        .map_err(AppError::storage("Error deleting recipe"))?
        .ok_or(AppError::NotFound)?;

    tracing::info!(recipe_id = %recipe.id, "Recipe deleted");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(recipe, "Recipe deleted successfully")))
}

fn pagination_info<T>(page: &Page<T>) -> PaginationInfo {
    PaginationInfo {
        current_page: page.request.page,
        total_pages: page.total_pages(),
        total_recipes: page.total,
        has_next: page.has_next(),
        has_prev: page.has_prev(),
    }
}
