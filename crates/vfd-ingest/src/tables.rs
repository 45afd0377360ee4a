//! Typed loading of the three source tables.
//!
//! Inventory rows pass through the eligibility filter here: a row with a
//! non-positive quantity or a denylisted identifier is never materialized as
//! an item. Numeric cells may carry thousands separators; a cell that is not
//! numeric after stripping them is a fatal load error, never a silent zero.

use tracing::{debug, info};
use vfd_model::{InventoryItem, ModelKey, PricePair, SourceTables};

use crate::csv_table::{CsvTable, read_csv_table};
use crate::error::{IngestError, Result};
use crate::header::{FieldRule, INVENTORY_FIELDS, LIST_FIELDS, SECONDARY_FIELDS, field, resolve_headers};
use crate::sources::SourcePaths;

/// Normalized keys excluded from the report: summary and placeholder rows
/// that sometimes carry a positive quantity in the inventory export.
pub const DENYLISTED_KEYS: &[&str] = &["TOTAL", "N/A", "UNKNOWN"];

/// Loads and normalizes all three tables.
pub fn load_sources(paths: &SourcePaths) -> Result<SourceTables> {
    let inventory = read_csv_table(&paths.inventory)?;
    let items = load_inventory(&inventory)?;
    info!(
        table = %inventory.name,
        row_count = inventory.rows.len(),
        item_count = items.len(),
        "inventory loaded"
    );

    let secondary_table = read_csv_table(&paths.secondary)?;
    let secondary = load_price_pairs(&secondary_table, SECONDARY_FIELDS, field::SECONDARY_PRICE)?;
    info!(table = %secondary_table.name, pair_count = secondary.len(), "secondary prices loaded");

    let list_table = read_csv_table(&paths.list)?;
    let list = load_price_pairs(&list_table, LIST_FIELDS, field::LIST_PRICE)?;
    info!(table = %list_table.name, pair_count = list.len(), "list prices loaded");

    Ok(SourceTables {
        items,
        secondary,
        list,
    })
}

/// Parses and filters the inventory table into eligible items.
///
/// Quantities must be integer-valued; a fractional quantity is malformed
/// (truncating one would smuggle a zero-quantity item past the filter).
pub fn load_inventory(table: &CsvTable) -> Result<Vec<InventoryItem>> {
    let headers = resolve_headers(table, INVENTORY_FIELDS)?;
    let model_col = headers.column(field::MODEL).unwrap_or(0);
    let qty_col = headers.column(field::QTY).unwrap_or(0);
    let cost_col = headers.column(field::TOTAL_COST).unwrap_or(0);

    let mut items = Vec::new();
    for (row_idx, row) in table.rows.iter().enumerate() {
        let raw_model = table.cell(row, model_col);
        let key = ModelKey::normalize(raw_model);
        let qty_cell = table.cell(row, qty_col);
        let qty = require_numeric(table, row_idx, qty_col, qty_cell)?;
        if qty <= 0.0 {
            debug!(key = %key, qty, "skipping non-positive quantity row");
            continue;
        }
        if qty.fract() != 0.0 {
            return Err(malformed_value(table, row_idx, qty_col, qty_cell));
        }
        if DENYLISTED_KEYS.contains(&key.as_str()) {
            debug!(key = %key, "skipping denylisted identifier");
            continue;
        }
        let total_cost = require_numeric(table, row_idx, cost_col, table.cell(row, cost_col))?;
        items.push(InventoryItem {
            key,
            qty: qty as i64,
            total_cost,
        });
    }
    Ok(items)
}

/// Parses a price table into `(key, value)` pairs in file order.
///
/// Duplicate keys are preserved here; the price index applies its last-wins
/// policy when the pairs are folded into a map.
pub fn load_price_pairs(
    table: &CsvTable,
    spec: &[FieldRule],
    price_field: &'static str,
) -> Result<Vec<PricePair>> {
    let headers = resolve_headers(table, spec)?;
    let model_col = headers.column(field::MODEL).unwrap_or(0);
    let price_col = headers.column(price_field).unwrap_or(0);

    let mut pairs = Vec::with_capacity(table.rows.len());
    for (row_idx, row) in table.rows.iter().enumerate() {
        let key = ModelKey::normalize(table.cell(row, model_col));
        let price = require_numeric(table, row_idx, price_col, table.cell(row, price_col))?;
        pairs.push((key, price));
    }
    Ok(pairs)
}

/// Strips thousands separators and parses, or fails the table load.
fn require_numeric(table: &CsvTable, row_idx: usize, column: usize, cell: &str) -> Result<f64> {
    parse_numeric(cell).ok_or_else(|| malformed_value(table, row_idx, column, cell))
}

fn malformed_value(table: &CsvTable, row_idx: usize, column: usize, cell: &str) -> IngestError {
    IngestError::MalformedValue {
        table: table.name.clone(),
        row: row_idx + 1,
        column: table
            .headers
            .get(column)
            .cloned()
            .unwrap_or_else(|| format!("#{column}")),
        value: cell.to_string(),
    }
}

fn parse_numeric(cell: &str) -> Option<f64> {
    let cleaned = cell.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}
