//! Voucher and voucher line types.

use cashup_shared::types::{BranchId, EmployeeId, VoucherId, VoucherItemId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification of an upstream voucher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoucherType {
    /// Sale of goods or services.
    Sales,
    /// Purchase of stock or supplies.
    Purchase,
    /// Cash received from an external source.
    Receipt,
    /// Cash paid out.
    Payment,
    /// General journal entry (ignored by this core).
    Journal,
}

/// Posting status of a voucher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoucherStatus {
    /// Voucher is posted and counts toward all calculations.
    Posted,
    /// Voucher was cancelled and is excluded from all calculations.
    Cancelled,
}

/// An upstream voucher header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voucher {
    /// The voucher ID.
    pub id: VoucherId,
    /// Branch the voucher was recorded at.
    pub branch_id: BranchId,
    /// Calendar date of the voucher.
    pub date: NaiveDate,
    /// Voucher classification.
    pub voucher_type: VoucherType,
    /// Posting status.
    pub status: VoucherStatus,
    /// Net amount of the voucher.
    pub net_amount: Decimal,
}

impl Voucher {
    /// Returns true if this voucher counts toward daily calculations.
    #[must_use]
    pub fn is_effective(&self) -> bool {
        self.status != VoucherStatus::Cancelled
    }
}

/// A line on an upstream voucher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherItem {
    /// The line ID.
    pub id: VoucherItemId,
    /// Parent voucher.
    pub voucher_id: VoucherId,
    /// Quantity sold on this line.
    pub quantity: Decimal,
    /// The employee credited with the sale, if attributed.
    pub salesman_id: Option<EmployeeId>,
}
