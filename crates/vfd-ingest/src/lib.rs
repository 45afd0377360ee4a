pub mod csv_table;
pub mod error;
pub mod header;
pub mod sources;
pub mod tables;

pub use csv_table::{CsvTable, read_csv_table};
pub use error::{IngestError, Result};
pub use header::{
    FieldRule, HeaderMap, INVENTORY_FIELDS, LIST_FIELDS, MatchRule, SECONDARY_FIELDS, field,
    resolve_headers,
};
pub use sources::{SourceOverrides, SourcePaths, locate_sources};
pub use tables::{DENYLISTED_KEYS, load_inventory, load_price_pairs, load_sources};
