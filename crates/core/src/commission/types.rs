//! Commission payout types.

use cashup_shared::types::EmployeeId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::master::Employee;

/// Payout tier of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Dual-commission-eligible staff; commission accrues monthly.
    Pro,
    /// Regular staff; commission is paid out the same day.
    Normal,
}

impl Tier {
    /// Derives the tier from the employee's eligibility flag.
    #[must_use]
    pub fn for_employee(employee: &Employee) -> Self {
        if employee.is_dual_commission_eligible {
            Self::Pro
        } else {
            Self::Normal
        }
    }

    /// Returns true if this tier is paid out on the day of service.
    #[must_use]
    pub fn is_payable_today(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// One employee's (or one manual entry's) commission payout line.
///
/// Derived on demand; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionLine {
    /// The employee (or referenced stylist) the line belongs to.
    pub employee_id: EmployeeId,
    /// Display name; a fallback label when the stylist is unknown.
    pub name: String,
    /// Payout tier.
    pub tier: Tier,
    /// Number of services rendered.
    pub service_count: Decimal,
    /// `service_count` times the configured rate.
    pub commission_amount: Decimal,
    /// True for Normal-tier lines, which are paid out the same day.
    pub is_payable_today: bool,
}

/// A full commission computation for one branch-date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionSummary {
    /// The individual payout lines.
    pub lines: Vec<CommissionLine>,
    /// Sum of same-day payable (Normal tier) amounts.
    pub total_payable_today: Decimal,
    /// Sum of monthly-accrued (Pro tier) amounts.
    pub total_accrued_monthly: Decimal,
}

impl CommissionSummary {
    /// Builds a summary from payout lines, totalling each payout bucket.
    #[must_use]
    pub fn from_lines(lines: Vec<CommissionLine>) -> Self {
        let total_payable_today = lines
            .iter()
            .filter(|l| l.is_payable_today)
            .map(|l| l.commission_amount)
            .sum();
        let total_accrued_monthly = lines
            .iter()
            .filter(|l| !l.is_payable_today)
            .map(|l| l.commission_amount)
            .sum();

        Self {
            lines,
            total_payable_today,
            total_accrued_monthly,
        }
    }

    /// Total commission across both payout buckets.
    #[must_use]
    pub fn total_commission(&self) -> Decimal {
        self.total_payable_today + self.total_accrued_monthly
    }
}
