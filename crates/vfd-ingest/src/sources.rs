//! Source table location.
//!
//! The three tables live in a data directory under fixed file names; each
//! can be overridden with an explicit path. A missing table aborts the run
//! before any processing.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

pub const INVENTORY_FILE: &str = "VFD_PRICE_LAST.csv";
pub const SECONDARY_FILE: &str = "VFD_PRICE_JULY_2025.csv";
pub const LIST_FILE: &str = "VFD_Price_SISL_Final.csv";

/// Verified paths to the three source tables.
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub inventory: PathBuf,
    pub secondary: PathBuf,
    pub list: PathBuf,
}

/// Optional per-table path overrides from the command line.
#[derive(Debug, Clone, Default)]
pub struct SourceOverrides {
    pub inventory: Option<PathBuf>,
    pub secondary: Option<PathBuf>,
    pub list: Option<PathBuf>,
}

/// Locates all three source tables, failing on the first one missing.
pub fn locate_sources(data_dir: &Path, overrides: &SourceOverrides) -> Result<SourcePaths> {
    let inventory = resolve_path(data_dir, INVENTORY_FILE, overrides.inventory.as_deref())?;
    let secondary = resolve_path(data_dir, SECONDARY_FILE, overrides.secondary.as_deref())?;
    let list = resolve_path(data_dir, LIST_FILE, overrides.list.as_deref())?;
    Ok(SourcePaths {
        inventory,
        secondary,
        list,
    })
}

fn resolve_path(data_dir: &Path, default_name: &str, over: Option<&Path>) -> Result<PathBuf> {
    let path = match over {
        Some(explicit) => explicit.to_path_buf(),
        None => data_dir.join(default_name),
    };
    if !path.is_file() {
        return Err(IngestError::MissingSource { path });
    }
    Ok(path)
}
