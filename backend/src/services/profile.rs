//! Profile service - business logic for pet records

use crate::error::{is_unique_violation, ApiError};
use crate::repositories::{
    CreateProfile, ListParams, ProfileRecord, ProfileRepository, UpdateProfile,
};
use pawcare_shared::types::{CreateProfileRequest, ProfileResponse, UpdateProfileRequest};
use sqlx::PgPool;

use super::non_empty;

/// Profile service for pet record operations
pub struct ProfileService;

impl ProfileService {
    /// Look up a profile by its unique name
    pub async fn get_by_name(pool: &PgPool, name: &str) -> Result<ProfileResponse, ApiError> {
        let record = ProfileRepository::get_by_name(pool, name)
            .await?
            .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

        Ok(to_response(record))
    }

    /// Look up a profile by id
    pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<ProfileResponse, ApiError> {
        let record = ProfileRepository::get_by_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

        Ok(to_response(record))
    }

    /// List profiles
    ///
    /// Not wired to a route; internal callers (admin tooling, tests)
    /// invoke this directly.
    pub async fn list(pool: &PgPool, params: ListParams) -> Result<Vec<ProfileResponse>, ApiError> {
        let records = ProfileRepository::list(pool, params).await?;

        Ok(records.into_iter().map(to_response).collect())
    }

    /// Create a profile; duplicate names surface as a conflict
    pub async fn create(
        pool: &PgPool,
        req: CreateProfileRequest,
    ) -> Result<ProfileResponse, ApiError> {
        let input = CreateProfile {
            name: req.name,
            gender: req.gender,
            variety: req.variety,
            birthday: req.birthday,
            meals_per_day: req.meals_per_day,
            description: req.description,
        };

        match ProfileRepository::create(pool, input).await {
            Ok(record) => Ok(to_response(record)),
            Err(e) if is_unique_violation(&e) => Err(ApiError::Conflict(
                "Profile with this name already exists".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Partially update a profile
    ///
    /// Only fields that are present and non-empty are applied; an
    /// update cannot clear a field.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        req: UpdateProfileRequest,
    ) -> Result<ProfileResponse, ApiError> {
        let changes = UpdateProfile {
            name: non_empty(req.name),
            gender: non_empty(req.gender),
            variety: non_empty(req.variety),
            birthday: req.birthday,
            meals_per_day: req.meals_per_day,
            description: non_empty(req.description),
        };

        match ProfileRepository::update(pool, id, changes).await {
            Ok(Some(record)) => Ok(to_response(record)),
            Ok(None) => Err(ApiError::NotFound("Profile not found".to_string())),
            Err(e) if is_unique_violation(&e) => Err(ApiError::Conflict(
                "Profile with this name already exists".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a profile by id
    ///
    /// Reminders owned by the profile are removed by the schema-level
    /// cascade.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), ApiError> {
        let deleted = ProfileRepository::delete(pool, id).await?;
        if !deleted {
            return Err(ApiError::NotFound("Profile not found".to_string()));
        }

        Ok(())
    }
}

fn to_response(record: ProfileRecord) -> ProfileResponse {
    ProfileResponse {
        id: record.id,
        name: record.name,
        gender: record.gender,
        variety: record.variety,
        birthday: record.birthday,
        meals_per_day: record.meals_per_day,
        description: record.description,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}
