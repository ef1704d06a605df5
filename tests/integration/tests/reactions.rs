//! Reaction listing, upsert, and delete behavior

use anyhow::Result;
use integration_tests::TestEnv;
use memo_common::{format_memo_name, format_reaction_name};
use memo_core::traits::UserRepository;
use memo_core::{Requester, Snowflake, Visibility};
use memo_service::{ReactionService, ServiceError};

#[tokio::test]
async fn list_reactions_returns_stored_reactions() -> Result<()> {
    let env = TestEnv::new()?;
    let (user, requester) = env.create_user().await?;
    let memo = env.create_memo(&user, Visibility::Public, &[]).await?;
    let content_id = format_memo_name(&memo.uid);

    let service = ReactionService::new(&env.ctx);
    service.upsert_reaction(&requester, &content_id, "👍").await?;
    service.upsert_reaction(&requester, &content_id, "🎉").await?;

    let reactions = service.list_reactions(&content_id).await?;
    assert_eq!(reactions.len(), 2);
    assert!(reactions.iter().all(|r| r.content_id == content_id));
    Ok(())
}

#[tokio::test]
async fn list_reactions_unknown_content_is_empty() -> Result<()> {
    let env = TestEnv::new()?;

    let reactions = ReactionService::new(&env.ctx)
        .list_reactions("memos/nothing-here")
        .await?;

    assert!(reactions.is_empty());
    Ok(())
}

#[tokio::test]
async fn requester_resolves_through_context_user_lookup() -> Result<()> {
    let env = TestEnv::new()?;
    let (user, _) = env.create_user().await?;

    // An authentication layer turns a session's user id into a requester
    // via the context's user repository.
    let found = env
        .ctx
        .user_repo()
        .find_by_id(user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("user not found"))?;
    let requester = Requester::from(&found);

    assert_eq!(requester.user_id(), Some(user.id));
    assert!(!requester.is_privileged());
    Ok(())
}

#[tokio::test]
async fn upsert_reaction_requires_authentication() -> Result<()> {
    let env = TestEnv::new()?;

    let err = ReactionService::new(&env.ctx)
        .upsert_reaction(&Requester::Anonymous, "memos/abc", "👍")
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Unauthenticated));
    Ok(())
}

#[tokio::test]
async fn upsert_reaction_rejects_blank_type() -> Result<()> {
    let env = TestEnv::new()?;
    let (_, requester) = env.create_user().await?;

    let service = ReactionService::new(&env.ctx);
    for blank in ["", "  "] {
        let err = service
            .upsert_reaction(&requester, "memos/abc", blank)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }
    Ok(())
}

#[tokio::test]
async fn upsert_reaction_rejects_malformed_content_id() -> Result<()> {
    let env = TestEnv::new()?;
    let (_, requester) = env.create_user().await?;

    let err = ReactionService::new(&env.ctx)
        .upsert_reaction(&requester, "users/1", "👍")
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::InvalidArgument(_)));
    Ok(())
}

#[tokio::test]
async fn upsert_reaction_is_idempotent() -> Result<()> {
    let env = TestEnv::new()?;
    let (user, requester) = env.create_user().await?;
    let memo = env.create_memo(&user, Visibility::Public, &[]).await?;
    let content_id = format_memo_name(&memo.uid);

    let service = ReactionService::new(&env.ctx);
    let first = service.upsert_reaction(&requester, &content_id, "👍").await?;
    let second = service.upsert_reaction(&requester, &content_id, "👍").await?;

    assert_eq!(first.name, second.name);
    assert_eq!(service.list_reactions(&content_id).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn different_types_are_distinct_reactions() -> Result<()> {
    let env = TestEnv::new()?;
    let (user, requester) = env.create_user().await?;
    let memo = env.create_memo(&user, Visibility::Public, &[]).await?;
    let content_id = format_memo_name(&memo.uid);

    let service = ReactionService::new(&env.ctx);
    service.upsert_reaction(&requester, &content_id, "👍").await?;
    service.upsert_reaction(&requester, &content_id, "❤️").await?;

    assert_eq!(service.list_reactions(&content_id).await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn delete_reaction_by_creator_succeeds() -> Result<()> {
    let env = TestEnv::new()?;
    let (user, requester) = env.create_user().await?;
    let memo = env.create_memo(&user, Visibility::Public, &[]).await?;
    let content_id = format_memo_name(&memo.uid);

    let service = ReactionService::new(&env.ctx);
    let stored = service.upsert_reaction(&requester, &content_id, "👍").await?;

    service.delete_reaction(&requester, &stored.name).await?;
    assert!(service.list_reactions(&content_id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn delete_reaction_requires_authentication() -> Result<()> {
    let env = TestEnv::new()?;

    let err = ReactionService::new(&env.ctx)
        .delete_reaction(&Requester::Anonymous, "memos/abc/reactions/1")
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Unauthenticated));
    Ok(())
}

#[tokio::test]
async fn delete_reaction_rejects_malformed_name() -> Result<()> {
    let env = TestEnv::new()?;
    let (_, requester) = env.create_user().await?;

    let err = ReactionService::new(&env.ctx)
        .delete_reaction(&requester, "memos/abc")
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::InvalidArgument(_)));
    Ok(())
}

#[tokio::test]
async fn delete_missing_reaction_masks_as_permission_denied() -> Result<()> {
    let env = TestEnv::new()?;
    let (_, requester) = env.create_user().await?;

    let name = format_reaction_name("memos/abc", Snowflake::new(424_242));
    let err = ReactionService::new(&env.ctx)
        .delete_reaction(&requester, &name)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::PermissionDenied));
    Ok(())
}

#[tokio::test]
async fn delete_foreign_reaction_masks_as_permission_denied() -> Result<()> {
    let env = TestEnv::new()?;
    let (owner, owner_requester) = env.create_user().await?;
    let (_, other_requester) = env.create_user().await?;
    let memo = env.create_memo(&owner, Visibility::Public, &[]).await?;
    let content_id = format_memo_name(&memo.uid);

    let service = ReactionService::new(&env.ctx);
    let stored = service
        .upsert_reaction(&owner_requester, &content_id, "👍")
        .await?;

    // Missing and foreign reactions are indistinguishable to the caller.
    let err = service
        .delete_reaction(&other_requester, &stored.name)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::PermissionDenied));

    assert_eq!(service.list_reactions(&content_id).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn delete_with_mismatched_memo_masks_as_permission_denied() -> Result<()> {
    let env = TestEnv::new()?;
    let (user, requester) = env.create_user().await?;
    let memo = env.create_memo(&user, Visibility::Public, &[]).await?;
    let content_id = format_memo_name(&memo.uid);

    let service = ReactionService::new(&env.ctx);
    let stored = service.upsert_reaction(&requester, &content_id, "👍").await?;

    // Same reaction id addressed under a different memo.
    let (_, id) = memo_common::parse_reaction_name(&stored.name)
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let wrong_name = format_reaction_name("memos/other", id);

    let err = service
        .delete_reaction(&requester, &wrong_name)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::PermissionDenied));
    Ok(())
}

#[tokio::test]
async fn privileged_requester_can_delete_any_reaction() -> Result<()> {
    let env = TestEnv::new()?;
    let (owner, owner_requester) = env.create_user().await?;
    let (_, host_requester) = env.create_host().await?;
    let memo = env.create_memo(&owner, Visibility::Public, &[]).await?;
    let content_id = format_memo_name(&memo.uid);

    let service = ReactionService::new(&env.ctx);
    let stored = service
        .upsert_reaction(&owner_requester, &content_id, "👍")
        .await?;

    service.delete_reaction(&host_requester, &stored.name).await?;
    assert!(service.list_reactions(&content_id).await?.is_empty());
    Ok(())
}
