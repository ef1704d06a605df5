//! Attachment entity <-> model mapper

use memo_core::entities::Attachment;
use memo_core::value_objects::Snowflake;

use crate::models::AttachmentModel;

/// Convert AttachmentModel to Attachment entity
impl From<AttachmentModel> for Attachment {
    fn from(model: AttachmentModel) -> Self {
        Attachment {
            id: Snowflake::new(model.id),
            memo_id: Snowflake::new(model.memo_id),
            filename: model.filename,
            media_type: model.media_type,
            size: model.size,
            created_at: model.created_at,
        }
    }
}
