pub mod error;
pub mod format;
pub mod render;
pub mod version;

pub use error::{ReportError, Result};
pub use format::{fmt_money, fmt_opt_money, fmt_opt_percent};
pub use render::{COLUMNS, report_row_cells, total_row_cells, write_csv_report, write_json_report};
pub use version::{REPORT_PREFIX, versioned_report_path};
