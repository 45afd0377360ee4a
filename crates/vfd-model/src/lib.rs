pub mod key;
pub mod types;

pub use key::{CapacityToken, KEY_PREFIX, ModelKey};
pub use types::{InventoryItem, PricePair, ReportRow, ResolvedRecord, SourceTables, StockReport};
