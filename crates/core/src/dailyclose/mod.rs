//! Daily record lifecycle: load, draft, close, and stylist-entry sync.
//!
//! A branch-date has at most one [`DailyRecord`]. The record moves from
//! `NoRecord` (nothing persisted yet) through `Open` drafts to `Closed`;
//! nothing in this core deletes a record. Manual-mode stylist entries are
//! synced as a batch alongside each save, deletions first.

pub mod error;
pub mod ports;
pub mod service;
pub mod types;

pub use error::{DailyCloseError, SyncPhase};
pub use ports::{EmployeeDirectory, RecordStore, StoreError, StylistEntryStore, TransactionSource};
pub use service::{DailyCloseService, SaveContext};
pub use types::{DailyDraft, DailyRecord, EntryWorkingSet, RecordStatus, StylistEntryDraft, StylistServiceEntry};
