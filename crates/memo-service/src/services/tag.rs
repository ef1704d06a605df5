//! Tag service
//!
//! Lists the tags a requester may see across a user's memos, aggregated
//! over the tag hierarchy.

use tracing::instrument;

use memo_common::parse_user_name;
use memo_core::tags::aggregate_tags;
use memo_core::Requester;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Tag service
pub struct TagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TagService<'a> {
    /// Create a new TagService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List tags across the memos of the user named by `parent`
    ///
    /// Only tags from memos the requester may view contribute to the
    /// result. An unknown but well-formed user name yields an empty list.
    #[instrument(skip(self))]
    pub async fn list_user_tags(
        &self,
        requester: &Requester,
        parent: &str,
    ) -> ServiceResult<Vec<String>> {
        let creator_id = parse_user_name(parent)?;

        let memos = self
            .ctx
            .memo_repo()
            .find_by_creator(creator_id)
            .await?;

        Ok(aggregate_tags(&memos, requester))
    }
}
