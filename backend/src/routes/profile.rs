//! Pet profile API routes

use crate::error::{ApiError, ApiResult};
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use pawcare_shared::types::{CreateProfileRequest, ProfileResponse, UpdateProfileRequest};
use pawcare_shared::validation::{
    validate_description, validate_gender, validate_meals_per_day, validate_name, validate_variety,
};

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/", post(create_profile)).route(
        "/:key",
        get(read_profile).patch(update_profile).delete(delete_profile),
    )
}

/// Reject invalid create payloads before they reach the service
fn validate_create(req: &CreateProfileRequest) -> ApiResult<()> {
    if let Err(msg) = validate_name(&req.name) {
        return Err(ApiError::Validation(format!("name: {}", msg)));
    }
    if let Err(msg) = validate_gender(&req.gender) {
        return Err(ApiError::Validation(format!("gender: {}", msg)));
    }
    if let Err(msg) = validate_variety(&req.variety) {
        return Err(ApiError::Validation(format!("variety: {}", msg)));
    }
    if let Err(msg) = validate_meals_per_day(req.meals_per_day) {
        return Err(ApiError::Validation(format!("meals_per_day: {}", msg)));
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
/// Blank string values are no-ops downstream, so only non-blank values
/// are checked. Numeric bounds are always checked when the field is
/// present.
fn validate_update(req: &UpdateProfileRequest) -> ApiResult<()> {
    if let Some(name) = req.name.as_deref().filter(|v| !v.trim().is_empty()) {
        if let Err(msg) = validate_name(name) {
            return Err(ApiError::Validation(format!("name: {}", msg)));
        }
    }
    if let Some(gender) = req.gender.as_deref().filter(|v| !v.trim().is_empty()) {
        if let Err(msg) = validate_gender(gender) {
            return Err(ApiError::Validation(format!("gender: {}", msg)));
        }
    }
    if let Some(variety) = req.variety.as_deref().filter(|v| !v.trim().is_empty()) {
        if let Err(msg) = validate_variety(variety) {
            return Err(ApiError::Validation(format!("variety: {}", msg)));
        }
    }
    if let Some(meals) = req.meals_per_day {
        if let Err(msg) = validate_meals_per_day(meals) {
            return Err(ApiError::Validation(format!("meals_per_day: {}", msg)));
        }
    }
    if let Some(description) = &req.description {
        if let Err(msg) = validate_description(description) {
            return Err(ApiError::Validation(format!("description: {}", msg)));
        }
    }

    Ok(())
}

/// POST /api/v1/profiles - Create a pet profile
async fn create_profile(
    State(state): State<AppState>,
    Json(req): Json<CreateProfileRequest>,
) -> ApiResult<(StatusCode, Json<ProfileResponse>)> {
    validate_create(&req)?;

    let profile = ProfileService::create(state.db(), req).await?;

    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/v1/profiles/:name - Look up a profile by its unique name
async fn read_profile(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = ProfileService::get_by_name(state.db(), &name).await?;

    Ok(Json(profile))
}

/// PATCH /api/v1/profiles/:id - Partially update a profile
async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    validate_update(&req)?;

    let profile = ProfileService::update(state.db(), id, req).await?;

    Ok(Json(profile))
}

/// DELETE /api/v1/profiles/:id - Delete a profile
async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    ProfileService::delete(state.db(), id).await?;

    Ok(StatusCode::NO_CONTENT)
}
