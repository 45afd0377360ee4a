//! The reconciliation pipeline, stage by stage.
//!
//! 1. **Index**: fold each price table into its immutable index
//! 2. **Resolve**: direct + fallback price lookup per inventory item
//! 3. **Metrics**: derive COGS, markup, discounts, gross margin
//! 4. **Rank**: stable capacity/family sort
//! 5. **Assemble**: sequence numbers and the aggregate total
//!
//! Strictly sequential and single pass; resolution gaps flow through as
//! absent values and never abort the run.

use std::time::Instant;

use tracing::{debug, info, info_span};
use vfd_model::{SourceTables, StockReport};

use crate::assemble::assemble;
use crate::index::PriceIndex;
use crate::metrics::compute_metrics;
use crate::rank::rank_records;
use crate::resolve::resolve_prices;

/// Runs the full engine over already-loaded source tables.
pub fn run_report(tables: SourceTables) -> StockReport {
    let start = Instant::now();

    let (secondary_index, list_index) = info_span!("index").in_scope(|| {
        let secondary_index = PriceIndex::build(&tables.secondary);
        let list_index = PriceIndex::build(&tables.list);
        debug!(
            secondary_keys = secondary_index.len(),
            list_keys = list_index.len(),
            "price indexes built"
        );
        (secondary_index, list_index)
    });

    let mut records = info_span!("resolve").in_scope(|| {
        let mut unresolved_list = 0usize;
        let records: Vec<_> = tables
            .items
            .into_iter()
            .map(|item| {
                let prices = resolve_prices(&item.key, &secondary_index, &list_index);
                if prices.list.is_none() {
                    unresolved_list += 1;
                }
                compute_metrics(item, prices)
            })
            .collect();
        debug!(
            item_count = records.len(),
            unresolved_list, "prices resolved"
        );
        records
    });

    info_span!("rank").in_scope(|| rank_records(&mut records));
    let report = info_span!("assemble").in_scope(|| assemble(records));

    info!(
        row_count = report.len(),
        total_qty = report.total_qty,
        duration_ms = start.elapsed().as_millis(),
        "report assembled"
    );
    report
}
