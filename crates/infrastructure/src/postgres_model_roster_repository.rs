use async_trait::async_trait;

use atelier_application::ModelRosterRepository;
use atelier_core::{AppError, AppResult, CreatorId, StudioId};

use sqlx::{FromRow, PgPool};

const LIST_CREATORS_FOR_STUDIO_SQL: &str = r#"
    SELECT assignments.creator_id
    FROM creator_assignments AS assignments
    WHERE assignments.studio_id = $1
    ORDER BY assignments.creator_id
    LIMIT $2
"#;

// `creator_id` is the primary key; if duplicates exist the lowest studio id wins.
const FIND_STUDIO_FOR_CREATOR_SQL: &str = r#"
    SELECT assignments.studio_id
    FROM creator_assignments AS assignments
    WHERE assignments.creator_id = $1
    ORDER BY assignments.studio_id
    LIMIT 1
"#;

/// PostgreSQL-backed roster of creator assignments.
///
/// Expects `creator_assignments (creator_id TEXT PRIMARY KEY, studio_id TEXT
/// NOT NULL)`, so a creator belongs to at most one studio.
#[derive(Clone)]
pub struct PostgresModelRosterRepository {
    pool: PgPool,
}

impl PostgresModelRosterRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CreatorRow {
    creator_id: String,
}

#[derive(Debug, FromRow)]
struct StudioRow {
    studio_id: String,
}

#[async_trait]
impl ModelRosterRepository for PostgresModelRosterRepository {
    async fn list_models_for_studio(
        &self,
        studio_id: &StudioId,
        limit: usize,
    ) -> AppResult<Vec<CreatorId>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = sqlx::query_as::<_, CreatorRow>(LIST_CREATORS_FOR_STUDIO_SQL)
            .bind(studio_id.as_str())
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|error| {
                AppError::Internal(format!(
                    "failed to list creators for studio '{studio_id}': {error}"
                ))
            })?;

        rows.into_iter()
            .map(|row| {
                CreatorId::new(row.creator_id.as_str()).map_err(|error| {
                    AppError::Internal(format!(
                        "failed to decode creator '{}' for studio '{studio_id}': {error}",
                        row.creator_id
                    ))
                })
            })
            .collect()
    }

    async fn find_studio_for_model(&self, creator_id: &CreatorId) -> AppResult<Option<StudioId>> {
        let row = sqlx::query_as::<_, StudioRow>(FIND_STUDIO_FOR_CREATOR_SQL)
            .bind(creator_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| {
                AppError::Internal(format!(
                    "failed to find studio for creator '{creator_id}': {error}"
                ))
            })?;

        row.map(|row| {
            StudioId::new(row.studio_id.as_str()).map_err(|error| {
                AppError::Internal(format!(
                    "failed to decode studio '{}' for creator '{creator_id}': {error}",
                    row.studio_id
                ))
            })
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::{FIND_STUDIO_FOR_CREATOR_SQL, LIST_CREATORS_FOR_STUDIO_SQL};

    #[test]
    fn roster_listing_is_ordered_and_bounded() {
        let sql = LIST_CREATORS_FOR_STUDIO_SQL.split_whitespace().collect::<Vec<_>>().join(" ");
        assert!(sql.ends_with("ORDER BY assignments.creator_id LIMIT $2"));
    }

    #[test]
    fn studio_lookup_picks_a_single_deterministic_row() {
        let sql = FIND_STUDIO_FOR_CREATOR_SQL.split_whitespace().collect::<Vec<_>>().join(" ");
        assert!(sql.ends_with("ORDER BY assignments.studio_id LIMIT 1"));
    }
}
