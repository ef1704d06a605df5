//! Hierarchical tag aggregation
//!
//! Tags are free-form strings using `/` as a path separator. Aggregation
//! merges tags from every memo the requester may view, drops blank values,
//! deduplicates exact strings, and orders the result so that an ancestor
//! tag precedes its descendants while pictographic decoration (emoji,
//! variation selectors) is ignored for comparison.
//!
//! Ordering never synthesizes ancestor tags: the output set is exactly the
//! deduplicated literal tag set.

use std::cmp::Ordering;

use crate::entities::Memo;
use crate::policy;
use crate::value_objects::Requester;

/// Aggregate the tags of every memo in `memos` that `requester` may view.
///
/// Returns a deduplicated list in hierarchical order. Tags that are empty
/// after trimming are excluded; surviving tags keep their raw form.
pub fn aggregate_tags<'a, I>(memos: I, requester: &Requester) -> Vec<String>
where
    I: IntoIterator<Item = &'a Memo>,
{
    let mut tags: Vec<String> = memos
        .into_iter()
        .filter(|memo| policy::can_view(memo.visibility, memo.creator_id, requester))
        .flat_map(|memo| memo.tags.iter())
        .filter(|tag| !tag.trim().is_empty())
        .cloned()
        .collect();

    tags.sort_unstable_by(|a, b| compare_tags(a, b));
    // Equal strings compare Equal, so duplicates are adjacent after sorting.
    tags.dedup();
    tags
}

/// Compare two tags with the default pictograph-stripping key.
pub fn compare_tags(a: &str, b: &str) -> Ordering {
    compare_tags_by(a, b, sort_key)
}

/// Compare two tags hierarchically using `key` to normalize each segment.
///
/// Segments are compared pairwise on their normalized keys; a tag that runs
/// out of segments (an ancestor) sorts before its descendants. The raw
/// strings break the tie only when every compared segment normalizes equal,
/// which keeps tags with identical visible text but different decoration in
/// a consistent total order.
pub fn compare_tags_by<F>(a: &str, b: &str, key: F) -> Ordering
where
    F: Fn(&str) -> String,
{
    let mut left = a.split('/');
    let mut right = b.split('/');

    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => match key(l).cmp(&key(r)) {
                Ordering::Equal => {}
                other => return other,
            },
        }
    }
}

/// Normalized comparison key for one tag segment: the segment with all
/// pictographic characters removed.
pub fn sort_key(segment: &str) -> String {
    segment.chars().filter(|c| !is_pictographic(*c)).collect()
}

/// Whether a character is treated as pictographic decoration for ordering.
///
/// Covers the common emoji blocks plus the joining machinery that rides
/// along with them (variation selectors, zero-width joiner, keycap
/// combiner). The exact block list is an ordering detail, not a data
/// constraint; callers needing a different set can pass their own key to
/// [`compare_tags_by`].
pub fn is_pictographic(c: char) -> bool {
    matches!(c,
        '\u{200D}'                      // zero-width joiner
        | '\u{20E3}'                    // combining enclosing keycap
        | '\u{FE00}'..='\u{FE0F}'       // variation selectors
        | '\u{2600}'..='\u{27BF}'       // misc symbols, dingbats
        | '\u{2B00}'..='\u{2BFF}'       // misc symbols and arrows
        | '\u{1F100}'..='\u{1FAFF}'     // enclosed alphanumerics through symbols ext-A
    )
}
