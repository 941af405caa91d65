//! Pet profile repository for database operations

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::query::ListParams;

/// Pet profile row from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRecord {
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

/// Input for creating a pet profile
#[derive(Debug, Clone)]
pub struct CreateProfile {
    pub name: String,
    pub gender: String,
    pub variety: String,
    pub birthday: Option<NaiveDate>,
    pub meals_per_day: i32,
    pub description: Option<String>,
}

/// Field changes for a partial profile update
///
/// `None` leaves the stored column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub variety: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub meals_per_day: Option<i32>,
    pub description: Option<String>,
}

impl UpdateProfile {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.gender.is_none()
            && self.variety.is_none()
            && self.birthday.is_none()
            && self.meals_per_day.is_none()
            && self.description.is_none()
    }
}

/// Pet profile repository for database operations
///
/// Constraint violations (duplicate `name`) propagate unchanged as
/// `sqlx::Error`; classification happens in the service layer.
/// Deleting a profile cascades to its reminders at the schema level.
pub struct ProfileRepository;

impl ProfileRepository {
    /// Get a profile by id
    pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<ProfileRecord>, sqlx::Error> {
        sqlx::query_as::<_, ProfileRecord>(
            r#"
            SELECT id, name, gender, variety, birthday, meals_per_day, description, created_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Get a profile by its unique name (exact match)
    pub async fn get_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<ProfileRecord>, sqlx::Error> {
        sqlx::query_as::<_, ProfileRecord>(
            r#"
            SELECT id, name, gender, variety, birthday, meals_per_day, description, created_at, updated_at
            FROM profiles
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    /// List profiles with search, ordering and pagination
    ///
    /// `params` are normalized here, same as the food listing.
    pub async fn list(
        pool: &PgPool,
        params: ListParams,
    ) -> Result<Vec<ProfileRecord>, sqlx::Error> {
        let params = params.normalize();

        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, name, gender, variety, birthday, meals_per_day, description, created_at, updated_at FROM profiles",
        );

        if let Some(search) = &params.search {
            let pattern = format!("%{}%", search);
            query
                .push(" WHERE (name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern)
                .push(")");
        }

        query
            .push(" ORDER BY ")
            .push(params.order_by.column())
            .push(" ")
            .push(params.direction.keyword());
        query.push(" LIMIT ").push_bind(params.limit);
        query.push(" OFFSET ").push_bind(params.offset);

        query
            .build_query_as::<ProfileRecord>()
            .fetch_all(pool)
            .await
    }

    /// Insert a new profile
    pub async fn create(pool: &PgPool, input: CreateProfile) -> Result<ProfileRecord, sqlx::Error> {
        sqlx::query_as::<_, ProfileRecord>(
            r#"
            INSERT INTO profiles (name, gender, variety, birthday, meals_per_day, description)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, gender, variety, birthday, meals_per_day, description, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.gender)
        .bind(&input.variety)
        .bind(input.birthday)
        .bind(input.meals_per_day)
        .bind(&input.description)
        .fetch_one(pool)
        .await
    }

    /// Apply a partial update; returns `None` when the id does not exist
    pub async fn update(
        pool: &PgPool,
        id: i64,
        changes: UpdateProfile,
    ) -> Result<Option<ProfileRecord>, sqlx::Error> {
        // Nothing to change: do not touch the row (updated_at stays put)
        if changes.is_empty() {
            return Self::get_by_id(pool, id).await;
        }

        sqlx::query_as::<_, ProfileRecord>(
            r#"
            UPDATE profiles SET
                name = COALESCE($2, name),
                gender = COALESCE($3, gender),
                variety = COALESCE($4, variety),
                birthday = COALESCE($5, birthday),
                meals_per_day = COALESCE($6, meals_per_day),
                description = COALESCE($7, description),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, gender, variety, birthday, meals_per_day, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.gender)
        .bind(changes.variety)
        .bind(changes.birthday)
        .bind(changes.meals_per_day)
        .bind(changes.description)
        .fetch_optional(pool)
        .await
    }

    /// Delete a profile by id; returns whether a row was removed
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
