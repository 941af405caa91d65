//! Food repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::query::ListParams;

/// Food row from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoodRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a food
#[derive(Debug, Clone)]
pub struct CreateFood {
    pub name: String,
    pub description: Option<String>,
}

/// Field changes for a partial food update
///
/// `None` leaves the stored column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateFood {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateFood {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Food repository for database operations
///
/// Constraint violations (duplicate `name`) propagate unchanged as
/// `sqlx::Error`; classification happens in the service layer.
pub struct FoodRepository;

impl FoodRepository {
    /// Get a food by id
    pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<FoodRecord>, sqlx::Error> {
        sqlx::query_as::<_, FoodRecord>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM foods
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Get a food by its unique name (exact match)
    pub async fn get_by_name(pool: &PgPool, name: &str) -> Result<Option<FoodRecord>, sqlx::Error> {
        sqlx::query_as::<_, FoodRecord>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM foods
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    /// List foods with search, ordering and pagination
    ///
    /// The limit cap and offset floor are repository guarantees, not
    /// caller obligations: `params` are normalized here.
    pub async fn list(pool: &PgPool, params: ListParams) -> Result<Vec<FoodRecord>, sqlx::Error> {
        let params = params.normalize();

        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT id, name, description, created_at, updated_at FROM foods");

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

        query.build_query_as::<FoodRecord>().fetch_all(pool).await
    }

    /// Insert a new food
    pub async fn create(pool: &PgPool, input: CreateFood) -> Result<FoodRecord, sqlx::Error> {
        sqlx::query_as::<_, FoodRecord>(
            r#"
            INSERT INTO foods (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(pool)
        .await
    }

    /// Apply a partial update; returns `None` when the id does not exist
    pub async fn update(
        pool: &PgPool,
        id: i64,
        changes: UpdateFood,
    ) -> Result<Option<FoodRecord>, sqlx::Error> {
        // Nothing to change: do not touch the row (updated_at stays put)
        if changes.is_empty() {
            return Self::get_by_id(pool, id).await;
        }

        sqlx::query_as::<_, FoodRecord>(
            r#"
            UPDATE foods SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.description)
        .fetch_optional(pool)
        .await
    }

    /// Delete a food by id; returns whether a row was removed
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM foods WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_is_empty() {
        assert!(UpdateFood::default().is_empty());
        assert!(!UpdateFood {
            name: Some("Kibble".to_string()),
            ..Default::default()
        }
        .is_empty());
    }
}
