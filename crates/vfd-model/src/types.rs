//! Record types flowing through the reconciliation pipeline.

use crate::key::ModelKey;

/// A normalized `(key, numeric value)` pair read from a price table, in file
/// order. Duplicate keys are resolved later by the price index (last wins).
pub type PricePair = (ModelKey, f64);

/// An eligible inventory row. Rows with non-positive quantity or a
/// denylisted identifier are never materialized as items.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InventoryItem {
    pub key: ModelKey,
    /// Units in stock; the eligibility filter guarantees `qty > 0`.
    pub qty: i64,
    /// Total acquisition cost for the whole quantity.
    pub total_cost: f64,
}

/// The three normalized source tables handed to the engine.
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub items: Vec<InventoryItem>,
    pub secondary: Vec<PricePair>,
    pub list: Vec<PricePair>,
}

/// An inventory item with resolved prices and derived financial metrics.
///
/// Every derived field that depends on an unresolved price is `None`, never
/// zero: zero is a valid price in principle.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResolvedRecord {
    pub item: InventoryItem,
    pub secondary_price: Option<f64>,
    pub list_price: Option<f64>,
    /// Cost of goods sold per unit: `total_cost / qty`.
    pub cogs: f64,
    /// COGS with the fixed 1.75 markup applied.
    pub cogs_marked: f64,
    pub discount_20: Option<f64>,
    pub discount_25: Option<f64>,
    pub discount_30: Option<f64>,
    pub gross_margin_pct: Option<f64>,
    /// Numeric capacity rating for sort ordering; `0.0` when no capacity
    /// token parses (such items sort first within their family).
    pub capacity: f64,
    /// Fixed product-family sort rank; unmapped families rank last.
    pub family_rank: u8,
}

/// A resolved record with its 1-based display sequence number, assigned after
/// the final sort and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReportRow {
    pub seq: u32,
    #[serde(flatten)]
    pub record: ResolvedRecord,
}

/// The assembled report: ordered rows plus the aggregate quantity total.
/// This is the sole artifact handed to the rendering collaborator.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StockReport {
    pub rows: Vec<ReportRow>,
    pub total_qty: i64,
}

impl StockReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
