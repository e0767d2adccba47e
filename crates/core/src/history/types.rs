//! History query and export types.

use cashup_shared::types::BranchId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dailyclose::DailyRecord;

/// A history query over saved daily records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HistoryQuery {
    /// Restrict to one branch; `None` means all branches.
    pub branch_id: Option<BranchId>,
    /// Inclusive start of the range.
    pub from: NaiveDate,
    /// Inclusive end of the range (treated as end-of-day).
    pub to: NaiveDate,
}

/// One row of a history result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRow {
    /// The saved record.
    pub record: DailyRecord,
    /// Outflow recomputed from the entry fields, so a stale persisted
    /// derived value can never leak into display or export.
    pub total_outflow: Decimal,
}

/// A flattened table for the external spreadsheet/print collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// One row of display strings per record.
    pub rows: Vec<Vec<String>>,
}
