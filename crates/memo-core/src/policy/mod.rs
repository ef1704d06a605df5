//! Visibility policy - decides what a requester may see
//!
//! One pure decision function consumed by every listing and mutation path,
//! so tag listing and content listing cannot drift apart. Evaluated per
//! content item; results are never cached across requests.

use crate::value_objects::{Requester, Snowflake, Visibility};

/// Decide whether `requester` may view content with the given visibility
/// tier and creator.
///
/// Rules, in priority order:
/// 1. the creator always sees their own content
/// 2. privileged requesters see everything
/// 3. `PUBLIC` is visible to anyone
/// 4. `PROTECTED` is visible to any authenticated user
/// 5. everything else is denied
pub fn can_view(visibility: Visibility, creator_id: Snowflake, requester: &Requester) -> bool {
    if requester.user_id() == Some(creator_id) {
        return true;
    }
    if requester.is_privileged() {
        return true;
    }
    match visibility {
        Visibility::Public => true,
        Visibility::Protected => requester.is_authenticated(),
        Visibility::Private => false,
    }
}
