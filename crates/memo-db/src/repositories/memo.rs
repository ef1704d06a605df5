//! PostgreSQL implementation of MemoRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use memo_core::entities::Memo;
use memo_core::traits::{MemoRepository, RepoResult};
use memo_core::value_objects::Snowflake;

use crate::models::MemoModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MemoRepository
#[derive(Clone)]
pub struct PgMemoRepository {
    pool: PgPool,
}

impl PgMemoRepository {
    /// Create a new PgMemoRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemoRepository for PgMemoRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Memo>> {
        let result = sqlx::query_as::<_, MemoModel>(
            r#"
            SELECT id, uid, creator_id, content, visibility, tags, pinned,
                   created_at, updated_at
            FROM memos
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Memo::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_uid(&self, uid: &str) -> RepoResult<Option<Memo>> {
        let result = sqlx::query_as::<_, MemoModel>(
            r#"
            SELECT id, uid, creator_id, content, visibility, tags, pinned,
                   created_at, updated_at
            FROM memos
            WHERE uid = $1
            "#,
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Memo::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_creator(&self, creator_id: Snowflake) -> RepoResult<Vec<Memo>> {
        let results = sqlx::query_as::<_, MemoModel>(
            r#"
            SELECT id, uid, creator_id, content, visibility, tags, pinned,
                   created_at, updated_at
            FROM memos
            WHERE creator_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(creator_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Memo::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, memo: &Memo) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO memos (id, uid, creator_id, content, visibility, tags,
                               pinned, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(memo.id.into_inner())
        .bind(&memo.uid)
        .bind(memo.creator_id.into_inner())
        .bind(&memo.content)
        .bind(memo.visibility.as_str())
        .bind(Json(&memo.tags))
        .bind(memo.pinned)
        .bind(memo.created_at)
        .bind(memo.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
