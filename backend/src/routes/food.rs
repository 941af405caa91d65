//! Food catalog API routes

use crate::error::{ApiError, ApiResult};
use crate::services::FoodService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use pawcare_shared::types::{CreateFoodRequest, FoodResponse, UpdateFoodRequest};
use pawcare_shared::validation::{validate_description, validate_name};

/// Create food routes
///
/// The trailing segment is a name for GET and an id for PATCH/DELETE,
/// matching the public API shape; axum resolves them through a single
/// path parameter.
pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_food))
        .route("/:key", get(read_food).patch(update_food).delete(delete_food))
}

/// Reject invalid create payloads before they reach the service
fn validate_create(req: &CreateFoodRequest) -> ApiResult<()> {
    if let Err(msg) = validate_name(&req.name) {
        return Err(ApiError::Validation(format!("name: {}", msg)));
    }
    if let Some(description) = &req.description {
        if let Err(msg) = validate_description(description) {
            return Err(ApiError::Validation(format!("description: {}", msg)));
        }
    }

    Ok(())
}

/// Reject invalid update payloads before they reach the service
///
/// Blank values are no-ops downstream, so only non-blank values are
/// checked here.
fn validate_update(req: &UpdateFoodRequest) -> ApiResult<()> {
    if let Some(name) = req.name.as_deref().filter(|v| !v.trim().is_empty()) {
        if let Err(msg) = validate_name(name) {
            return Err(ApiError::Validation(format!("name: {}", msg)));
        }
    }
    if let Some(description) = &req.description {
        if let Err(msg) = validate_description(description) {
            return Err(ApiError::Validation(format!("description: {}", msg)));
        }
    }

    Ok(())
}

/// POST /api/v1/foods - Create a food
async fn create_food(
    State(state): State<AppState>,
    Json(req): Json<CreateFoodRequest>,
) -> ApiResult<(StatusCode, Json<FoodResponse>)> {
    validate_create(&req)?;

    let food = FoodService::create(state.db(), req).await?;

    Ok((StatusCode::CREATED, Json(food)))
}

/// GET /api/v1/foods/:name - Look up a food by its unique name
async fn read_food(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<FoodResponse>> {
    let food = FoodService::get_by_name(state.db(), &name).await?;

    Ok(Json(food))
}

/// PATCH /api/v1/foods/:id - Partially update a food
async fn update_food(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateFoodRequest>,
) -> ApiResult<Json<FoodResponse>> {
    validate_update(&req)?;

    let food = FoodService::update(state.db(), id, req).await?;

    Ok(Json(food))
}

/// DELETE /api/v1/foods/:id - Delete a food
async fn delete_food(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    FoodService::delete(state.db(), id).await?;

    Ok(StatusCode::NO_CONTENT)
}
