//! Daily record lifecycle controller.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use cashup_shared::config::CommissionMode;
use cashup_shared::types::{BranchId, CompanyId, DailyRecordId, StylistEntryId, UserId};

use super::error::{DailyCloseError, SyncPhase};
use super::ports::{EmployeeDirectory, RecordStore, StylistEntryStore, TransactionSource};
use super::types::{
    DailyDraft, DailyRecord, EntryWorkingSet, RecordStatus, StylistServiceEntry,
};
use crate::commission::{CommissionEngine, CommissionSummary};
use crate::history::{HistoryQuery, HistoryReporter, HistoryRow};
use crate::master::Branch;
use crate::reconcile::{AutofillOutcome, ReconcileService};

/// Externally supplied context for a save operation.
///
/// The active branch and acting identity come from the surrounding
/// application (tenant switcher, session); they are explicit parameters
/// here, never ambient state.
#[derive(Debug, Clone)]
pub struct SaveContext {
    /// The branch selected in the UI, if any.
    pub branch: Option<Branch>,
    /// The identity performing the save.
    pub acting_user: UserId,
}

/// Orchestrates the daily-close workflow for one branch-date at a time.
///
/// Pure calculation is delegated to [`ReconcileService`] and
/// [`CommissionEngine`]; this controller owns the I/O sequencing, in
/// particular that queued stylist-entry deletions complete before any
/// creates or updates are issued.
pub struct DailyCloseService<R, S, T, E> {
    records: R,
    entries: S,
    transactions: T,
    employees: E,
    rate: Decimal,
}

impl<R, S, T, E> DailyCloseService<R, S, T, E>
where
    R: RecordStore,
    S: StylistEntryStore,
    T: TransactionSource,
    E: EmployeeDirectory,
{
    /// Creates a controller over the given store adapters.
    ///
    /// `rate` is the configured commission payout per service.
    pub fn new(records: R, entries: S, transactions: T, employees: E, rate: Decimal) -> Self {
        Self {
            records,
            entries,
            transactions,
            employees,
            rate,
        }
    }

    /// Loads the editing state for a branch-date.
    ///
    /// When a record exists, the draft mirrors it (including its stylist
    /// entries). Otherwise a fresh draft is seeded with `opening_cash`
    /// carried forward from the most recent earlier record's counted
    /// closing cash.
    pub async fn load(
        &self,
        branch_id: BranchId,
        date: NaiveDate,
    ) -> Result<DailyDraft, DailyCloseError> {
        if let Some(record) = self.records.find_by_branch_date(branch_id, date).await? {
            let entries = self.entries.list_for_day(branch_id, date).await?;
            return Ok(DailyDraft::from_record(&record, &entries));
        }

        let opening_cash = self
            .records
            .latest_before(branch_id, date)
            .await?
            .map_or(Decimal::ZERO, |prior| prior.fields.closing_cash_actual);

        info!(%branch_id, %date, %opening_cash, "seeded fresh draft with carried-forward opening cash");
        Ok(DailyDraft::carried_forward(opening_cash))
    }

    /// Computes autofill suggestions from the day's vouchers, on demand.
    ///
    /// Returns [`AutofillOutcome::NoVouchers`] when the day has nothing to
    /// suggest; the caller surfaces that as a notice. Suggestions are never
    /// applied to a draft here.
    pub async fn autofill_from_transactions(
        &self,
        branch_id: BranchId,
        date: NaiveDate,
    ) -> Result<AutofillOutcome, DailyCloseError> {
        let vouchers = self.transactions.list_vouchers(branch_id, date).await?;
        Ok(ReconcileService::suggest_from_vouchers(&vouchers))
    }

    /// Computes the commission breakdown for a branch-date under `mode`.
    ///
    /// Manual mode reads tallies from the supplied working set;
    /// transactional mode fetches the day's sales vouchers and lines.
    pub async fn compute_commissions(
        &self,
        mode: CommissionMode,
        company_id: CompanyId,
        branch_id: BranchId,
        date: NaiveDate,
        working_set: &EntryWorkingSet,
    ) -> Result<CommissionSummary, DailyCloseError> {
        let employees = self.employees.list_employees(company_id).await?;

        let summary = match mode {
            CommissionMode::Manual => {
                CommissionEngine::from_manual_entries(&working_set.current, &employees, self.rate)
            }
            CommissionMode::Transactional => {
                let vouchers = self.transactions.list_vouchers(branch_id, date).await?;
                let voucher_ids: Vec<_> = vouchers.iter().map(|v| v.id).collect();
                let items = self.transactions.list_voucher_items(&voucher_ids).await?;
                CommissionEngine::from_transactions(&employees, &vouchers, &items, self.rate)
            }
        };

        Ok(summary)
    }

    /// Saves the draft with status `Open`.
    pub async fn save_daily_record(
        &self,
        draft: &DailyDraft,
        date: NaiveDate,
        mode: CommissionMode,
        ctx: &SaveContext,
    ) -> Result<(DailyRecord, EntryWorkingSet), DailyCloseError> {
        self.persist(draft, date, RecordStatus::Open, mode, ctx).await
    }

    /// Saves the draft with status `Closed`, finalizing the day.
    ///
    /// Closing is otherwise identical to saving a draft; the closed state
    /// is advisory and does not block later edits.
    pub async fn close_daily_record(
        &self,
        draft: &DailyDraft,
        date: NaiveDate,
        mode: CommissionMode,
        ctx: &SaveContext,
    ) -> Result<(DailyRecord, EntryWorkingSet), DailyCloseError> {
        self.persist(draft, date, RecordStatus::Closed, mode, ctx).await
    }

    /// Queries saved records over an inclusive date range, newest first.
    pub async fn query_history(
        &self,
        query: &HistoryQuery,
    ) -> Result<Vec<HistoryRow>, DailyCloseError> {
        let records = self.records.list(query.branch_id).await?;
        Ok(HistoryReporter::filter_rows(records, query))
    }

    async fn persist(
        &self,
        draft: &DailyDraft,
        date: NaiveDate,
        status: RecordStatus,
        mode: CommissionMode,
        ctx: &SaveContext,
    ) -> Result<(DailyRecord, EntryWorkingSet), DailyCloseError> {
        // Validation happens before any store call.
        let branch = ctx.branch.as_ref().ok_or(DailyCloseError::NoBranchSelected)?;

        let existing = self.records.find_by_branch_date(branch.id, date).await?;
        if existing.is_none() && !branch.is_selectable() {
            return Err(DailyCloseError::BranchNotSelectable(branch.id));
        }

        let totals = ReconcileService::reconcile(&draft.fields);
        let now = Utc::now();
        let record = DailyRecord {
            id: existing
                .as_ref()
                .map_or_else(DailyRecordId::new, |r| r.id),
            branch_id: branch.id,
            date,
            fields: draft.fields.clone(),
            deposited_by: draft.deposited_by.clone(),
            notes: draft.notes.clone(),
            status,
            // Stamped at creation, never overwritten afterwards.
            opened_by: existing
                .as_ref()
                .map_or(ctx.acting_user, |r| r.opened_by),
            total_sales: totals.total_sales,
            closing_cash_system: totals.system_cash,
            difference: totals.difference,
            created_at: existing.as_ref().map_or(now, |r| r.created_at),
            updated_at: now,
        };

        let saved = self.records.upsert(record).await?;

        let working_set = if mode == CommissionMode::Manual {
            self.sync_entries(branch.id, date, &draft.entries).await?
        } else {
            draft.entries.clone()
        };

        info!(
            branch_id = %branch.id,
            %date,
            status = ?saved.status,
            system_cash = %saved.closing_cash_system,
            difference = %saved.difference,
            "daily record saved"
        );

        Ok((saved, working_set))
    }

    /// Syncs the working set against the store for one branch-date.
    ///
    /// All queued deletions must complete before any create or update is
    /// issued, so a reordered write can never resurrect a removed row. The
    /// returned working set has a cleared deletion queue; on failure the
    /// caller's set is untouched and the save can be retried as-is.
    async fn sync_entries(
        &self,
        branch_id: BranchId,
        date: NaiveDate,
        set: &EntryWorkingSet,
    ) -> Result<EntryWorkingSet, DailyCloseError> {
        for &id in &set.deleted {
            self.entries.delete(id).await.map_err(|source| {
                warn!(%branch_id, %date, entry_id = %id, "stylist entry deletion failed");
                DailyCloseError::EntrySync {
                    phase: SyncPhase::Delete,
                    source,
                }
            })?;
        }

        let mut saved = Vec::with_capacity(set.current.len());
        for draft in &set.current {
            let entry = StylistServiceEntry {
                id: draft.id.unwrap_or_else(StylistEntryId::new),
                stylist_id: draft.stylist_id,
                service_count: draft.service_count,
                branch_id,
                date,
            };
            let result = if draft.id.is_some() {
                self.entries.update(entry).await
            } else {
                self.entries.create(entry).await
            };
            let persisted = result.map_err(|source| {
                warn!(%branch_id, %date, "stylist entry write failed");
                DailyCloseError::EntrySync {
                    phase: SyncPhase::Write,
                    source,
                }
            })?;
            saved.push(persisted);
        }

        info!(
            %branch_id,
            %date,
            deleted = set.deleted.len(),
            written = saved.len(),
            "stylist entries synced"
        );
        Ok(EntryWorkingSet::from_persisted(&saved))
    }
}
