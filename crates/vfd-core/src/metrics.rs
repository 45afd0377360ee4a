//! Derived financial metrics.

use vfd_model::{InventoryItem, ResolvedRecord};

use crate::rank::sort_key;
use crate::resolve::ResolvedPrices;

/// Fixed markup applied to per-unit cost.
pub const COGS_MARKUP: f64 = 1.75;

/// Discount multipliers for the 20/25/30 percent tiers.
pub const DISCOUNT_RATES: [f64; 3] = [0.80, 0.75, 0.70];

/// Computes the derived metrics for one item. Pure; no rounding happens
/// here, presentation rounding belongs to the renderer.
///
/// The eligibility filter guarantees `qty > 0`, so the per-unit division is
/// always defined. Metrics depending on an absent price stay absent.
pub fn compute_metrics(item: InventoryItem, prices: ResolvedPrices) -> ResolvedRecord {
    let cogs = item.total_cost / item.qty as f64;
    let cogs_marked = cogs * COGS_MARKUP;
    let discount = |rate: f64| prices.list.map(|list| list * rate);
    let gross_margin_pct = match prices.list {
        Some(list) if cogs > 0.0 => Some((list - cogs) / cogs * 100.0),
        _ => None,
    };
    let (capacity, family_rank) = sort_key(&item.key);
    ResolvedRecord {
        secondary_price: prices.secondary,
        list_price: prices.list,
        cogs,
        cogs_marked,
        discount_20: discount(DISCOUNT_RATES[0]),
        discount_25: discount(DISCOUNT_RATES[1]),
        discount_30: discount(DISCOUNT_RATES[2]),
        gross_margin_pct,
        capacity,
        family_rank,
        item,
    }
}
