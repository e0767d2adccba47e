//! Async store ports at the I/O boundary.
//!
//! The record store and transaction feed are external collaborators; these
//! traits are the only seam through which the lifecycle controller touches
//! them. All domain calculation happens synchronously over data fetched
//! through these ports.

use async_trait::async_trait;
use cashup_shared::types::{BranchId, CompanyId, StylistEntryId, VoucherId};
use chrono::NaiveDate;
use thiserror::Error;

use super::types::{DailyRecord, StylistServiceEntry};
use crate::master::Employee;
use crate::vouchers::{Voucher, VoucherItem};

/// Errors surfaced by store adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested row does not exist.
    #[error("record not found")]
    NotFound,

    /// The backing store failed; retrying may succeed.
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Persistence for daily records, keyed by (branch, date).
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns the record for the branch-date, if one exists.
    async fn find_by_branch_date(
        &self,
        branch_id: BranchId,
        date: NaiveDate,
    ) -> Result<Option<DailyRecord>, StoreError>;

    /// Returns the most recent record strictly before `date` for the
    /// branch; used for the opening-balance carry-forward.
    async fn latest_before(
        &self,
        branch_id: BranchId,
        date: NaiveDate,
    ) -> Result<Option<DailyRecord>, StoreError>;

    /// Creates or replaces the record for its branch-date.
    async fn upsert(&self, record: DailyRecord) -> Result<DailyRecord, StoreError>;

    /// Lists records, optionally scoped to one branch.
    async fn list(&self, branch_id: Option<BranchId>) -> Result<Vec<DailyRecord>, StoreError>;
}

/// Persistence for manual-mode stylist entries.
#[async_trait]
pub trait StylistEntryStore: Send + Sync {
    /// Lists the entries for a branch-date.
    async fn list_for_day(
        &self,
        branch_id: BranchId,
        date: NaiveDate,
    ) -> Result<Vec<StylistServiceEntry>, StoreError>;

    /// Creates a new entry.
    async fn create(&self, entry: StylistServiceEntry) -> Result<StylistServiceEntry, StoreError>;

    /// Updates an existing entry in place.
    async fn update(&self, entry: StylistServiceEntry) -> Result<StylistServiceEntry, StoreError>;

    /// Deletes an entry by ID. Deleting an already-absent entry is not an
    /// error, so a retried sync stays idempotent.
    async fn delete(&self, id: StylistEntryId) -> Result<(), StoreError>;
}

/// Read-only feed of upstream vouchers.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Lists the vouchers recorded for a branch-date.
    async fn list_vouchers(
        &self,
        branch_id: BranchId,
        date: NaiveDate,
    ) -> Result<Vec<Voucher>, StoreError>;

    /// Lists the lines of the given vouchers.
    async fn list_voucher_items(
        &self,
        voucher_ids: &[VoucherId],
    ) -> Result<Vec<VoucherItem>, StoreError>;
}

/// Read-only employee roster.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Lists the employees of a company.
    async fn list_employees(&self, company_id: CompanyId) -> Result<Vec<Employee>, StoreError>;
}

// Arc delegation so one adapter instance can back several ports.

#[async_trait]
impl<T: RecordStore + ?Sized> RecordStore for std::sync::Arc<T> {
    async fn find_by_branch_date(
        &self,
        branch_id: BranchId,
        date: NaiveDate,
    ) -> Result<Option<DailyRecord>, StoreError> {
        (**self).find_by_branch_date(branch_id, date).await
    }

    async fn latest_before(
        &self,
        branch_id: BranchId,
        date: NaiveDate,
    ) -> Result<Option<DailyRecord>, StoreError> {
        (**self).latest_before(branch_id, date).await
    }

    async fn upsert(&self, record: DailyRecord) -> Result<DailyRecord, StoreError> {
        (**self).upsert(record).await
    }

    async fn list(&self, branch_id: Option<BranchId>) -> Result<Vec<DailyRecord>, StoreError> {
        (**self).list(branch_id).await
    }
}

#[async_trait]
impl<T: StylistEntryStore + ?Sized> StylistEntryStore for std::sync::Arc<T> {
    async fn list_for_day(
        &self,
        branch_id: BranchId,
        date: NaiveDate,
    ) -> Result<Vec<StylistServiceEntry>, StoreError> {
        (**self).list_for_day(branch_id, date).await
    }

    async fn create(&self, entry: StylistServiceEntry) -> Result<StylistServiceEntry, StoreError> {
        (**self).create(entry).await
    }

    async fn update(&self, entry: StylistServiceEntry) -> Result<StylistServiceEntry, StoreError> {
        (**self).update(entry).await
    }

    async fn delete(&self, id: StylistEntryId) -> Result<(), StoreError> {
        (**self).delete(id).await
    }
}

#[async_trait]
impl<T: TransactionSource + ?Sized> TransactionSource for std::sync::Arc<T> {
    async fn list_vouchers(
        &self,
        branch_id: BranchId,
        date: NaiveDate,
    ) -> Result<Vec<Voucher>, StoreError> {
        (**self).list_vouchers(branch_id, date).await
    }

    async fn list_voucher_items(
        &self,
        voucher_ids: &[VoucherId],
    ) -> Result<Vec<VoucherItem>, StoreError> {
        (**self).list_voucher_items(voucher_ids).await
    }
}

#[async_trait]
impl<T: EmployeeDirectory + ?Sized> EmployeeDirectory for std::sync::Arc<T> {
    async fn list_employees(&self, company_id: CompanyId) -> Result<Vec<Employee>, StoreError> {
        (**self).list_employees(company_id).await
    }
}
