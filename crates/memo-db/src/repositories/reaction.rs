//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use memo_core::entities::Reaction;
use memo_core::traits::{ReactionRepository, RepoResult};
use memo_core::value_objects::Snowflake;

use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, creator_id, content_id, reaction_type, created_at
            FROM reactions
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn find_by_content(&self, content_id: &str) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, creator_id, content_id, reaction_type, created_at
            FROM reactions
            WHERE content_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(content_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self))]
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<Reaction> {
        // On conflict the existing row keeps its id and created_at, so a
        // repeated reaction stays the same logical resource. The no-op
        // update makes RETURNING yield the surviving row either way.
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            INSERT INTO reactions (id, creator_id, content_id, reaction_type, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (creator_id, content_id, reaction_type)
            DO UPDATE SET reaction_type = EXCLUDED.reaction_type
            RETURNING id, creator_id, content_id, reaction_type, created_at
            "#,
        )
        .bind(reaction.id.into_inner())
        .bind(reaction.creator_id.into_inner())
        .bind(&reaction.content_id)
        .bind(&reaction.reaction_type)
        .bind(reaction.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Reaction::from(result))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM reactions WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
