//! Food service - business logic for the food catalog

use crate::error::{is_unique_violation, ApiError};
use crate::repositories::{CreateFood, FoodRecord, FoodRepository, ListParams, UpdateFood};
use pawcare_shared::types::{CreateFoodRequest, FoodResponse, UpdateFoodRequest};
use sqlx::PgPool;

use super::non_empty;

/// Food service for catalog operations
pub struct FoodService;

impl FoodService {
    /// Look up a food by its unique name
    pub async fn get_by_name(pool: &PgPool, name: &str) -> Result<FoodResponse, ApiError> {
        let record = FoodRepository::get_by_name(pool, name)
            .await?
            .ok_or_else(|| ApiError::NotFound("Food not found".to_string()))?;

        Ok(to_response(record))
    }

    /// Look up a food by id
    pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<FoodResponse, ApiError> {
        let record = FoodRepository::get_by_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Food not found".to_string()))?;

        Ok(to_response(record))
    }

    /// List foods
    ///
    /// Not wired to a route; internal callers (admin tooling, tests)
    /// invoke this directly.
    pub async fn list(pool: &PgPool, params: ListParams) -> Result<Vec<FoodResponse>, ApiError> {
        let records = FoodRepository::list(pool, params).await?;

        Ok(records.into_iter().map(to_response).collect())
    }

    /// Create a food; duplicate names surface as a conflict
    pub async fn create(pool: &PgPool, req: CreateFoodRequest) -> Result<FoodResponse, ApiError> {
        let input = CreateFood {
            name: req.name,
            description: req.description,
        };

        match FoodRepository::create(pool, input).await {
            Ok(record) => Ok(to_response(record)),
            Err(e) if is_unique_violation(&e) => Err(ApiError::Conflict(
                "Food with this name already exists".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Partially update a food
    ///
    /// Only fields that are present and non-empty are applied; an
    /// update cannot clear a field.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        req: UpdateFoodRequest,
    ) -> Result<FoodResponse, ApiError> {
        let changes = UpdateFood {
            name: non_empty(req.name),
            description: non_empty(req.description),
        };

        match FoodRepository::update(pool, id, changes).await {
            Ok(Some(record)) => Ok(to_response(record)),
            Ok(None) => Err(ApiError::NotFound("Food not found".to_string())),
            Err(e) if is_unique_violation(&e) => Err(ApiError::Conflict(
                "Food with this name already exists".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a food by id
    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), ApiError> {
        let deleted = FoodRepository::delete(pool, id).await?;
        if !deleted {
            return Err(ApiError::NotFound("Food not found".to_string()));
        }

        Ok(())
    }
}

fn to_response(record: FoodRecord) -> FoodResponse {
    FoodResponse {
        id: record.id,
        name: record.name,
        description: record.description,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}
