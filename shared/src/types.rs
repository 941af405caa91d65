//! API request and response types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Food Types
// ============================================================================

/// Request body for creating a food
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFoodRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for partially updating a food
///
/// Every field is optional; absent, null and empty-string values leave
/// the stored field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFoodRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Food representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Profile Types
// ============================================================================

fn default_meals_per_day() -> i32 {
    2
}

/// Request body for creating a pet profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub gender: String,
    pub variety: String,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    /// Meals per day; defaults to 2 when omitted
    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for partially updating a pet profile
///
/// Same partial-update semantics as [`UpdateFoodRequest`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub variety: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub meals_per_day: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Pet profile representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub variety: String,
    pub birthday: Option<NaiveDate>,
    pub meals_per_day: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
