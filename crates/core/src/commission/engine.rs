//! Commission computation over pre-fetched data.

use std::collections::HashSet;

use cashup_shared::config::CommissionMode;
use rust_decimal::Decimal;

use super::types::{CommissionLine, CommissionSummary, Tier};
use crate::dailyclose::StylistEntryDraft;
use crate::master::Employee;
use crate::vouchers::{Voucher, VoucherItem, VoucherType};

/// Display label for manual entries whose stylist is unknown or no longer
/// active.
const UNKNOWN_STYLIST_LABEL: &str = "Unknown stylist";

/// Commission engine for per-employee payout computation.
///
/// All methods are pure functions over already-fetched data; fetching the
/// vouchers, items, and employee roster is the lifecycle controller's job.
pub struct CommissionEngine;

impl CommissionEngine {
    /// Dispatches to the computation matching the configured mode.
    #[must_use]
    pub fn compute(
        mode: CommissionMode,
        employees: &[Employee],
        vouchers: &[Voucher],
        items: &[VoucherItem],
        entries: &[StylistEntryDraft],
        rate: Decimal,
    ) -> CommissionSummary {
        match mode {
            CommissionMode::Transactional => Self::from_transactions(employees, vouchers, items, rate),
            CommissionMode::Manual => Self::from_manual_entries(entries, employees, rate),
        }
    }

    /// Transactional mode: service counts derived from sales voucher lines.
    ///
    /// For each active employee, `service_count` is the sum of line
    /// quantities across the day's non-cancelled Sales vouchers attributed
    /// to them. Employees with a zero count are omitted entirely.
    #[must_use]
    pub fn from_transactions(
        employees: &[Employee],
        vouchers: &[Voucher],
        items: &[VoucherItem],
        rate: Decimal,
    ) -> CommissionSummary {
        let sales_voucher_ids: HashSet<_> = vouchers
            .iter()
            .filter(|v| v.voucher_type == VoucherType::Sales && v.is_effective())
            .map(|v| v.id)
            .collect();

        let mut lines = Vec::new();
        for employee in employees.iter().filter(|e| e.is_active) {
            let service_count: Decimal = items
                .iter()
                .filter(|item| {
                    sales_voucher_ids.contains(&item.voucher_id)
                        && item.salesman_id == Some(employee.id)
                })
                .map(|item| item.quantity)
                .sum();

            if service_count.is_zero() {
                continue;
            }

            lines.push(Self::make_line(
                employee.id,
                employee.name.clone(),
                Tier::for_employee(employee),
                service_count,
                rate,
            ));
        }

        CommissionSummary::from_lines(lines)
    }

    /// Manual mode: one line per working-set entry.
    ///
    /// Entries are never merged, even when several reference the same
    /// stylist. Entries whose stylist is not in the active roster render
    /// with a fallback label at Normal tier rather than failing.
    #[must_use]
    pub fn from_manual_entries(
        entries: &[StylistEntryDraft],
        employees: &[Employee],
        rate: Decimal,
    ) -> CommissionSummary {
        let lines = entries
            .iter()
            .map(|entry| {
                let stylist = employees
                    .iter()
                    .find(|e| e.id == entry.stylist_id && e.is_active);
                let (name, tier) = match stylist {
                    Some(employee) => (employee.name.clone(), Tier::for_employee(employee)),
                    None => (UNKNOWN_STYLIST_LABEL.to_string(), Tier::Normal),
                };

                Self::make_line(
                    entry.stylist_id,
                    name,
                    tier,
                    Decimal::from(entry.service_count),
                    rate,
                )
            })
            .collect();

        CommissionSummary::from_lines(lines)
    }

    fn make_line(
        employee_id: cashup_shared::types::EmployeeId,
        name: String,
        tier: Tier,
        service_count: Decimal,
        rate: Decimal,
    ) -> CommissionLine {
        CommissionLine {
            employee_id,
            name,
            tier,
            service_count,
            commission_amount: (service_count * rate).round_dp(2),
            is_payable_today: tier.is_payable_today(),
        }
    }
}
