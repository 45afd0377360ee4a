pub mod assemble;
pub mod fallback;
pub mod index;
pub mod metrics;
pub mod pipeline;
pub mod rank;
pub mod resolve;

pub use assemble::assemble;
pub use fallback::{list_candidates, secondary_candidates};
pub use index::PriceIndex;
pub use metrics::compute_metrics;
pub use pipeline::run_report;
pub use rank::{family_rank, rank_records, sort_key};
pub use resolve::{ResolvedPrices, resolve_prices};
