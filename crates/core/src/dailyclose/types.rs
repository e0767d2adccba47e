//! Daily record and stylist-entry types.

use cashup_shared::types::{BranchId, DailyRecordId, EmployeeId, StylistEntryId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::commission::CommissionSummary;
use crate::reconcile::{AutofillSuggestion, DailyFields, DailyTotals, ReconcileService};

/// Lifecycle status of a daily record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// Day is still being edited.
    Open,
    /// Day has been finalized by the close action.
    ///
    /// Advisory only: the store does not reject further saves. Callers
    /// that want to gate editing check [`RecordStatus::is_final`].
    Closed,
}

impl RecordStatus {
    /// Returns true if the day has been finalized.
    #[must_use]
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// The persisted daily cash-up record for one branch-date.
///
/// Uniquely identified by (`branch_id`, `date`). The derived fields
/// (`total_sales`, `closing_cash_system`, `difference`) are recomputed from
/// the entry fields on every save and never accepted as input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    /// The record ID.
    pub id: DailyRecordId,
    /// The branch this record belongs to.
    pub branch_id: BranchId,
    /// The calendar date this record covers.
    pub date: NaiveDate,
    /// The raw entry fields.
    #[serde(flatten)]
    pub fields: DailyFields,
    /// Who carried the deposit to the bank (free text).
    pub deposited_by: String,
    /// Free-text notes for the day.
    pub notes: String,
    /// Lifecycle status.
    pub status: RecordStatus,
    /// Identity of the creator; stamped once, never overwritten.
    pub opened_by: UserId,
    /// Derived: revenue across all settlement channels.
    pub total_sales: Decimal,
    /// Derived: the cash balance the books predict.
    pub closing_cash_system: Decimal,
    /// Derived: counted cash minus system cash.
    pub difference: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last save timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A persisted stylist service tally (manual commission mode only).
///
/// Multiple entries per stylist per day are allowed and stay separate
/// line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StylistServiceEntry {
    /// The entry ID.
    pub id: StylistEntryId,
    /// The stylist the tally belongs to.
    pub stylist_id: EmployeeId,
    /// Number of services rendered (non-negative).
    pub service_count: u32,
    /// The branch scope.
    pub branch_id: BranchId,
    /// The date scope.
    pub date: NaiveDate,
}

/// An in-memory stylist entry being edited, persisted or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylistEntryDraft {
    /// The persisted ID, if this draft was loaded from the store.
    pub id: Option<StylistEntryId>,
    /// The stylist the tally belongs to.
    pub stylist_id: EmployeeId,
    /// Number of services rendered.
    pub service_count: u32,
}

impl StylistEntryDraft {
    /// Creates a new, not-yet-persisted entry draft.
    #[must_use]
    pub fn new(stylist_id: EmployeeId, service_count: u32) -> Self {
        Self {
            id: None,
            stylist_id,
            service_count,
        }
    }

    /// Creates a draft backed by a persisted entry.
    #[must_use]
    pub fn from_persisted(entry: &StylistServiceEntry) -> Self {
        Self {
            id: Some(entry.id),
            stylist_id: entry.stylist_id,
            service_count: entry.service_count,
        }
    }
}

/// The working set of stylist entries for the day being edited.
///
/// Removing a persisted entry queues it for deletion; the queue is only
/// cleared by a successful save, so a failed save can be retried without
/// resurrecting removed rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryWorkingSet {
    /// Entries currently in the set.
    pub current: Vec<StylistEntryDraft>,
    /// Persisted entry IDs queued for deletion on the next save.
    pub deleted: Vec<StylistEntryId>,
}

impl EntryWorkingSet {
    /// Builds a working set from the persisted entries of a branch-date.
    #[must_use]
    pub fn from_persisted(entries: &[StylistServiceEntry]) -> Self {
        Self {
            current: entries.iter().map(StylistEntryDraft::from_persisted).collect(),
            deleted: Vec::new(),
        }
    }

    /// Adds a new entry to the set.
    pub fn add(&mut self, stylist_id: EmployeeId, service_count: u32) {
        self.current.push(StylistEntryDraft::new(stylist_id, service_count));
    }

    /// Removes the entry at `index`, queueing it for deletion if it was
    /// already persisted. Returns the removed draft, or `None` when the
    /// index is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<StylistEntryDraft> {
        if index >= self.current.len() {
            return None;
        }
        let removed = self.current.remove(index);
        if let Some(id) = removed.id {
            self.deleted.push(id);
        }
        Some(removed)
    }
}

/// The in-progress editing state for one branch-date.
///
/// Holds everything the save operation needs besides the externally
/// supplied branch/user context.
#[derive(Debug, Clone, Default)]
pub struct DailyDraft {
    /// The existing record ID, when editing a previously saved day.
    pub record_id: Option<DailyRecordId>,
    /// The raw entry fields.
    pub fields: DailyFields,
    /// Who carried the deposit to the bank.
    pub deposited_by: String,
    /// Free-text notes.
    pub notes: String,
    /// Current status; `Open` for fresh drafts.
    pub status: Option<RecordStatus>,
    /// The original creator, when editing an existing record.
    pub opened_by: Option<UserId>,
    /// Manual-mode stylist entries being edited.
    pub entries: EntryWorkingSet,
    /// Whether payable commission has already been pushed into
    /// `employee_expenses` for this draft.
    commission_applied: bool,
}

impl DailyDraft {
    /// Builds a draft from a persisted record and its stylist entries.
    #[must_use]
    pub fn from_record(record: &DailyRecord, entries: &[StylistServiceEntry]) -> Self {
        Self {
            record_id: Some(record.id),
            fields: record.fields.clone(),
            deposited_by: record.deposited_by.clone(),
            notes: record.notes.clone(),
            status: Some(record.status),
            opened_by: Some(record.opened_by),
            entries: EntryWorkingSet::from_persisted(entries),
            commission_applied: false,
        }
    }

    /// Builds a fresh draft carrying forward the prior day's counted cash.
    #[must_use]
    pub fn carried_forward(opening_cash: Decimal) -> Self {
        Self {
            fields: DailyFields {
                opening_cash,
                ..DailyFields::default()
            },
            ..Self::default()
        }
    }

    /// Live-preview totals for the current field values.
    #[must_use]
    pub fn totals(&self) -> DailyTotals {
        ReconcileService::reconcile(&self.fields)
    }

    /// Applies autofill suggestions onto the entry fields.
    pub fn apply_autofill(&mut self, suggestion: &AutofillSuggestion) {
        self.fields.apply_suggestion(suggestion);
    }

    /// Adds the summary's same-day payable total to `employee_expenses`.
    ///
    /// Guarded so a second invocation on the same draft is a no-op;
    /// returns false when the guard suppressed the mutation.
    pub fn apply_payable_commission(&mut self, summary: &CommissionSummary) -> bool {
        if self.commission_applied {
            return false;
        }
        self.fields.employee_expenses += summary.total_payable_today;
        self.commission_applied = true;
        true
    }
}
