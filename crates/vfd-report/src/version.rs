//! Date- and version-tagged output file naming.
//!
//! Report files are named `SISL_VFD_PL_<YYMMDD>_V.<NN>.csv`; the version is
//! one greater than the highest already present for the same day tag, so
//! re-runs never overwrite an earlier report.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::Result;

pub const REPORT_PREFIX: &str = "SISL_VFD_PL";

/// Picks the next free versioned CSV path in `out_dir` for `date`.
pub fn versioned_report_path(out_dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let tag = date.format("%y%m%d").to_string();
    let mut highest = 0u32;
    if out_dir.is_dir() {
        for entry in std::fs::read_dir(out_dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(version) = parse_version(name, &tag) {
                highest = highest.max(version);
            }
        }
    }
    let file_name = format!("{REPORT_PREFIX}_{tag}_V.{:02}.csv", highest + 1);
    Ok(out_dir.join(file_name))
}

/// Extracts the version number from a file name matching this day's tag.
fn parse_version(file_name: &str, tag: &str) -> Option<u32> {
    let rest = file_name.strip_prefix(REPORT_PREFIX)?;
    let rest = rest.strip_prefix('_')?;
    let rest = rest.strip_prefix(tag)?;
    let rest = rest.strip_prefix("_V.")?;
    let digits = rest.strip_suffix(".csv")?;
    digits.parse::<u32>().ok()
}
