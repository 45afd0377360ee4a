//! Per-item price resolution against the two price indexes.

use tracing::trace;
use vfd_model::ModelKey;

use crate::fallback::{list_candidates, secondary_candidates};
use crate::index::PriceIndex;

/// The two prices resolved for one inventory key. `None` means no direct or
/// fallback match existed; that is a normal terminal state, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolvedPrices {
    pub secondary: Option<f64>,
    pub list: Option<f64>,
}

/// Resolves the secondary and list price for one key: direct lookup first,
/// then the ordered fallback candidates, first index hit wins.
pub fn resolve_prices(
    key: &ModelKey,
    secondary_index: &PriceIndex,
    list_index: &PriceIndex,
) -> ResolvedPrices {
    let secondary = lookup_chain(key, secondary_index, secondary_candidates);
    let list = lookup_chain(key, list_index, list_candidates);
    ResolvedPrices { secondary, list }
}

fn lookup_chain(
    key: &ModelKey,
    index: &PriceIndex,
    candidates: fn(&ModelKey) -> Vec<ModelKey>,
) -> Option<f64> {
    // The empty key stands for an unusable identifier and matches nothing,
    // even when a blank price row put an empty entry in the index.
    if key.is_empty() {
        return None;
    }
    if let Some(value) = index.get(key) {
        return Some(value);
    }
    for candidate in candidates(key) {
        if let Some(value) = index.get(&candidate) {
            trace!(key = %key, candidate = %candidate, "fallback hit");
            return Some(value);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(entries: &[(&str, f64)]) -> PriceIndex {
        let pairs: Vec<_> = entries
            .iter()
            .map(|(key, value)| (ModelKey::normalize(key), *value))
            .collect();
        PriceIndex::build(&pairs)
    }

    #[test]
    fn direct_hit_short_circuits_fallback() {
        let secondary = index(&[("FR-D720S-0.4K", 900.0), ("FR-E820-0.4K", 1000.0)]);
        let list = index(&[]);
        let key = ModelKey::normalize("FR-D720S-0.4K");
        let prices = resolve_prices(&key, &secondary, &list);
        assert_eq!(prices.secondary, Some(900.0));
        assert_eq!(prices.list, None);
    }

    #[test]
    fn direct_zero_price_is_not_treated_as_a_miss() {
        let secondary = index(&[("FR-D720S-0.4K", 0.0), ("FR-E820-0.4K", 1000.0)]);
        let list = index(&[]);
        let key = ModelKey::normalize("FR-D720S-0.4K");
        let prices = resolve_prices(&key, &secondary, &list);
        assert_eq!(prices.secondary, Some(0.0));
    }

    #[test]
    fn secondary_falls_back_through_the_e_root() {
        let secondary = index(&[("FR-E820-0.4K", 1000.0)]);
        let key = ModelKey::normalize("FR-D720S-0.4K");
        let prices = resolve_prices(&key, &secondary, &index(&[]));
        assert_eq!(prices.secondary, Some(1000.0));
    }

    #[test]
    fn list_prefers_a_root_over_e_root_over_substitution() {
        let key = ModelKey::normalize("FR-D720S-0.4K");

        let list = index(&[("FR-A820-0.4K", 150.0), ("FR-E820-0.4K", 140.0)]);
        assert_eq!(resolve_prices(&key, &index(&[]), &list).list, Some(150.0));

        let list = index(&[("FR-E820-0.4K", 140.0), ("FR-E720S-0.4K", 130.0)]);
        assert_eq!(resolve_prices(&key, &index(&[]), &list).list, Some(140.0));

        let list = index(&[("FR-F720S-0.4K", 125.0)]);
        assert_eq!(resolve_prices(&key, &index(&[]), &list).list, Some(125.0));
    }

    #[test]
    fn exhausted_chain_leaves_price_absent() {
        let key = ModelKey::normalize("FR-D720S-0.4K");
        let prices = resolve_prices(&key, &index(&[]), &index(&[("FR-X999-9K", 1.0)]));
        assert_eq!(prices, ResolvedPrices::default());
    }

    #[test]
    fn empty_key_never_resolves() {
        let key = ModelKey::normalize("");
        let prices = resolve_prices(&key, &index(&[("FR-E820-0.4K", 1.0)]), &index(&[]));
        assert_eq!(prices, ResolvedPrices::default());
    }
}
