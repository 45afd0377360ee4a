//! Fixed-column report rendering.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;
use vfd_model::{ReportRow, StockReport};

use crate::error::{ReportError, Result};
use crate::format::{fmt_money, fmt_opt_money, fmt_opt_percent};

/// The report's fixed column set and order.
pub const COLUMNS: [&str; 11] = [
    "SL",
    "Model",
    "Qty",
    "List Price",
    "20% Disc",
    "25% Disc",
    "30% Disc",
    "GP%",
    "COGS",
    "COGS x1.75",
    "1.27",
];

/// Renders one report row into its display cells, in [`COLUMNS`] order.
pub fn report_row_cells(row: &ReportRow) -> Vec<String> {
    let record = &row.record;
    vec![
        row.seq.to_string(),
        record.item.key.to_string(),
        record.item.qty.to_string(),
        fmt_opt_money(record.list_price),
        fmt_opt_money(record.discount_20),
        fmt_opt_money(record.discount_25),
        fmt_opt_money(record.discount_30),
        fmt_opt_percent(record.gross_margin_pct),
        fmt_money(record.cogs),
        fmt_money(record.cogs_marked),
        fmt_opt_money(record.secondary_price),
    ]
}

/// The trailing total row: aggregate quantity under the Qty column.
pub fn total_row_cells(report: &StockReport) -> Vec<String> {
    let mut cells = vec![String::new(); COLUMNS.len()];
    cells[1] = "Total".to_string();
    cells[2] = report.total_qty.to_string();
    cells
}

/// Writes the report as CSV with the fixed column set and a total row.
pub fn write_csv_report(path: &Path, report: &StockReport) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    let wrap = |source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    writer.write_record(COLUMNS).map_err(wrap)?;
    for row in &report.rows {
        writer.write_record(report_row_cells(row)).map_err(wrap)?;
    }
    writer.write_record(total_row_cells(report)).map_err(wrap)?;
    writer.flush()?;
    info!(path = %path.display(), row_count = report.len(), "csv report written");
    Ok(())
}

/// Writes the machine-readable JSON sidecar of the assembled report.
pub fn write_json_report(path: &Path, report: &StockReport) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    info!(path = %path.display(), row_count = report.len(), "json report written");
    Ok(())
}
