use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use vfd_core::run_report;
use vfd_ingest::{SourceOverrides, load_sources, locate_sources};
use vfd_model::StockReport;
use vfd_report::{versioned_report_path, write_csv_report, write_json_report};

use crate::cli::ReportArgs;

/// Outcome of a report run, handed to the terminal summary.
#[derive(Debug)]
pub struct ReportRunResult {
    pub report: StockReport,
    pub csv_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
}

pub fn run_report_command(args: &ReportArgs) -> Result<ReportRunResult> {
    let run_span = info_span!("report", data_dir = %args.data_dir.display());
    let _run_guard = run_span.enter();

    let tables = info_span!("ingest").in_scope(|| -> Result<_> {
        let overrides = SourceOverrides {
            inventory: args.inventory.clone(),
            secondary: args.secondary.clone(),
            list: args.list_price.clone(),
        };
        let paths = locate_sources(&args.data_dir, &overrides).context("locate source tables")?;
        load_sources(&paths).context("load source tables")
    })?;

    let report = run_report(tables);

    if args.dry_run {
        info!(row_count = report.len(), "dry run, skipping output files");
        return Ok(ReportRunResult {
            report,
            csv_path: None,
            json_path: None,
        });
    }

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.data_dir.join("reports"));
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;

    let csv_path = versioned_report_path(&output_dir, Local::now().date_naive())
        .context("pick report file name")?;
    write_csv_report(&csv_path, &report)
        .with_context(|| format!("write {}", csv_path.display()))?;

    let json_path = if args.no_json {
        None
    } else {
        let path = csv_path.with_extension("json");
        write_json_report(&path, &report)
            .with_context(|| format!("write {}", path.display()))?;
        Some(path)
    };

    Ok(ReportRunResult {
        report,
        csv_path: Some(csv_path),
        json_path,
    })
}
