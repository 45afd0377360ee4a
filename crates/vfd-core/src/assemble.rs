//! Final report assembly.

use vfd_model::{ReportRow, ResolvedRecord, StockReport};

/// Assigns 1-based sequence numbers strictly in the given (already ranked)
/// order and computes the aggregate quantity. No further filtering or
/// mutation happens here.
pub fn assemble(records: Vec<ResolvedRecord>) -> StockReport {
    let total_qty = records.iter().map(|record| record.item.qty).sum();
    let rows = records
        .into_iter()
        .zip(1u32..)
        .map(|(record, seq)| ReportRow { seq, record })
        .collect();
    StockReport { rows, total_qty }
}
