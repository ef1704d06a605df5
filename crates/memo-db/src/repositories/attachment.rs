//! PostgreSQL implementation of AttachmentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use memo_core::entities::Attachment;
use memo_core::traits::{AttachmentRepository, RepoResult};
use memo_core::value_objects::Snowflake;

use crate::models::AttachmentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AttachmentRepository
#[derive(Clone)]
pub struct PgAttachmentRepository {
    pool: PgPool,
}

impl PgAttachmentRepository {
    /// Create a new PgAttachmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttachmentRepository for PgAttachmentRepository {
    #[instrument(skip(self))]
    async fn find_by_memo(&self, memo_id: Snowflake) -> RepoResult<Vec<Attachment>> {
        let results = sqlx::query_as::<_, AttachmentModel>(
            r#"
            SELECT id, memo_id, filename, media_type, size, created_at
            FROM attachments
            WHERE memo_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(memo_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Attachment::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, attachment: &Attachment) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO attachments (id, memo_id, filename, media_type, size, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(attachment.id.into_inner())
        .bind(attachment.memo_id.into_inner())
        .bind(&attachment.filename)
        .bind(&attachment.media_type)
        .bind(attachment.size)
        .bind(attachment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
