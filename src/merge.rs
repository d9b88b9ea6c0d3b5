//! Field-level metadata inheritance.
//!
//! Resolution combines each node's own descriptor with its already-resolved
//! parent. Each [`CommonFields`] member has its own algebra:
//!
//! | Field | Rule |
//! |-------|------|
//! | `enabled` | AND — disabling is irrevocable downward |
//! | `tags` | set union, deduplicated, sorted |
//! | `sort_order` | child wins if non-empty, else parent's resolved value |
//! | `access` | set union, deduplicated, sorted |
//! | `filter` | child's rules first, then parent's (nearest rule first) |
//!
//! The merge is a pure function: inputs are untouched and a fresh value is
//! returned, so a single resolved parent can be shared across all of its
//! siblings. The parent side is [`CommonFields`] rather than a full
//! descriptor — album-only fields never inherit, and the signature makes
//! that unrepresentable.

use crate::types::{AlbumMetadata, CommonFields};
use std::collections::BTreeSet;

/// Combine a node's own descriptor with its fully resolved parent.
///
/// Album-only fields (title, photos, aliases, titles, captions) pass
/// through from `child` untouched.
pub fn merge(child: &AlbumMetadata, parent: &CommonFields) -> AlbumMetadata {
    let mut merged = child.clone();
    merged.common = CommonFields {
        enabled: child.common.enabled && parent.enabled,
        tags: union_sorted(&child.common.tags, &parent.tags),
        sort_order: if child.common.sort_order.is_empty() {
            parent.sort_order.clone()
        } else {
            child.common.sort_order.clone()
        },
        access: union_sorted(&child.common.access, &parent.access),
        filter: child
            .common
            .filter
            .iter()
            .chain(&parent.filter)
            .cloned()
            .collect(),
    };
    merged
}

/// Set union of two string lists, deduplicated and sorted.
fn union_sorted(a: &[String], b: &[String]) -> Vec<String> {
    a.iter()
        .chain(b)
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
