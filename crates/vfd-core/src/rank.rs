//! Presentation ordering: capacity first, then product family.

use std::cmp::Ordering;

use vfd_model::{ModelKey, ResolvedRecord};

/// Fixed family presentation order.
pub const FAMILY_ORDER: [(char, u8); 5] = [('D', 0), ('E', 1), ('F', 2), ('A', 3), ('H', 4)];

/// Rank for families outside the fixed order (and keys with no family tag);
/// they sort after all mapped families.
pub const UNRANKED_FAMILY: u8 = 99;

/// Maps a key's family tag to its fixed order.
pub fn family_rank(key: &ModelKey) -> u8 {
    let Some(tag) = key.family_tag() else {
        return UNRANKED_FAMILY;
    };
    FAMILY_ORDER
        .iter()
        .find(|(family, _)| *family == tag)
        .map(|(_, rank)| *rank)
        .unwrap_or(UNRANKED_FAMILY)
}

/// The ranking pair for one key. A key with no parsable capacity token ranks
/// at capacity `0.0`, sorting first within its family bucket; this is
/// documented policy, not an accident.
pub fn sort_key(key: &ModelKey) -> (f64, u8) {
    let capacity = key.capacity_token().map(|token| token.value).unwrap_or(0.0);
    (capacity, family_rank(key))
}

/// Stable sort: ascending capacity, then ascending family rank; remaining
/// ties keep the original input order.
pub fn rank_records(records: &mut [ResolvedRecord]) {
    records.sort_by(|a, b| {
        a.capacity
            .partial_cmp(&b.capacity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.family_rank.cmp(&b.family_rank))
    });
}
