//! DashMap-backed in-memory store.

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use tracing::debug;

use cashup_core::dailyclose::{
    DailyRecord, EmployeeDirectory, RecordStore, StoreError, StylistEntryStore,
    StylistServiceEntry, TransactionSource,
};
use cashup_core::master::Employee;
use cashup_core::vouchers::{Voucher, VoucherItem};
use cashup_shared::types::{BranchId, CompanyId, StylistEntryId, VoucherId, VoucherItemId};

/// In-memory implementation of every core store port.
///
/// Concurrent-safe via `DashMap`; suitable for tests and single-process
/// demos. Upserts are last-write-wins, matching the semantics the core
/// assumes of its external store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<(BranchId, NaiveDate), DailyRecord>,
    entries: DashMap<StylistEntryId, StylistServiceEntry>,
    vouchers: DashMap<VoucherId, Voucher>,
    items: DashMap<VoucherItemId, VoucherItem>,
    employees: DashMap<CompanyId, Vec<Employee>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an upstream voucher.
    pub fn insert_voucher(&self, voucher: Voucher) {
        self.vouchers.insert(voucher.id, voucher);
    }

    /// Seeds an upstream voucher line.
    pub fn insert_voucher_item(&self, item: VoucherItem) {
        self.items.insert(item.id, item);
    }

    /// Seeds an employee into a company's roster.
    pub fn insert_employee(&self, company_id: CompanyId, employee: Employee) {
        self.employees.entry(company_id).or_default().push(employee);
    }

    /// Number of stylist entries currently stored (test helper).
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_by_branch_date(
        &self,
        branch_id: BranchId,
        date: NaiveDate,
    ) -> Result<Option<DailyRecord>, StoreError> {
        Ok(self.records.get(&(branch_id, date)).map(|r| r.value().clone()))
    }

    async fn latest_before(
        &self,
        branch_id: BranchId,
        date: NaiveDate,
    ) -> Result<Option<DailyRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|kv| kv.branch_id == branch_id && kv.date < date)
            .max_by_key(|kv| kv.date)
            .map(|kv| kv.value().clone()))
    }

    async fn upsert(&self, record: DailyRecord) -> Result<DailyRecord, StoreError> {
        debug!(branch_id = %record.branch_id, date = %record.date, "upserting daily record");
        self.records
            .insert((record.branch_id, record.date), record.clone());
        Ok(record)
    }

    async fn list(&self, branch_id: Option<BranchId>) -> Result<Vec<DailyRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|kv| branch_id.is_none_or(|b| kv.branch_id == b))
            .map(|kv| kv.value().clone())
            .collect())
    }
}

#[async_trait]
impl StylistEntryStore for MemoryStore {
    async fn list_for_day(
        &self,
        branch_id: BranchId,
        date: NaiveDate,
    ) -> Result<Vec<StylistServiceEntry>, StoreError> {
        Ok(self
            .entries
            .iter()
            .filter(|kv| kv.branch_id == branch_id && kv.date == date)
            .map(|kv| kv.value().clone())
            .collect())
    }

    async fn create(&self, entry: StylistServiceEntry) -> Result<StylistServiceEntry, StoreError> {
        self.entries.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn update(&self, entry: StylistServiceEntry) -> Result<StylistServiceEntry, StoreError> {
        self.entries.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn delete(&self, id: StylistEntryId) -> Result<(), StoreError> {
        // Absent ids are fine; a retried sync must stay idempotent.
        self.entries.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl TransactionSource for MemoryStore {
    async fn list_vouchers(
        &self,
        branch_id: BranchId,
        date: NaiveDate,
    ) -> Result<Vec<Voucher>, StoreError> {
        Ok(self
            .vouchers
            .iter()
            .filter(|kv| kv.branch_id == branch_id && kv.date == date)
            .map(|kv| kv.value().clone())
            .collect())
    }

    async fn list_voucher_items(
        &self,
        voucher_ids: &[VoucherId],
    ) -> Result<Vec<VoucherItem>, StoreError> {
        Ok(self
            .items
            .iter()
            .filter(|kv| voucher_ids.contains(&kv.voucher_id))
            .map(|kv| kv.value().clone())
            .collect())
    }
}

#[async_trait]
impl EmployeeDirectory for MemoryStore {
    async fn list_employees(&self, company_id: CompanyId) -> Result<Vec<Employee>, StoreError> {
        Ok(self
            .employees
            .get(&company_id)
            .map(|roster| roster.value().clone())
            .unwrap_or_default())
    }
}
