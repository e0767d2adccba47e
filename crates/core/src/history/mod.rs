//! History querying and export flattening.
//!
//! Thin aggregation layer over saved daily records: inclusive date-range
//! filtering, newest-first ordering, and flattening into a table handed to
//! the external spreadsheet/print collaborator.

pub mod reporter;
pub mod types;

pub use reporter::HistoryReporter;
pub use types::{ExportTable, HistoryQuery, HistoryRow};
