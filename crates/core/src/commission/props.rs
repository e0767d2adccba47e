//! Property-based tests for the commission payout rules.

use cashup_shared::types::EmployeeId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::CommissionEngine;
use crate::dailyclose::StylistEntryDraft;
use crate::master::Employee;

/// Strategy for a small roster of employees with mixed tiers.
fn roster() -> impl Strategy<Value = Vec<Employee>> {
    prop::collection::vec(any::<bool>(), 1..8).prop_map(|tiers| {
        tiers
            .into_iter()
            .enumerate()
            .map(|(i, eligible)| Employee {
                id: EmployeeId::new(),
                name: format!("Employee {i}"),
                is_active: true,
                is_dual_commission_eligible: eligible,
            })
            .collect()
    })
}

/// Strategy for a positive per-service rate with 2 decimal places.
fn rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* manual tally set, the total commission equals
    /// rate * total service count (rate has 2dp, so per-line rounding
    /// never loses anything).
    #[test]
    fn prop_total_commission_identity(
        employees in roster(),
        counts in prop::collection::vec(0u32..500, 0..12),
        rate in rate(),
    ) {
        let entries: Vec<StylistEntryDraft> = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                StylistEntryDraft::new(employees[i % employees.len()].id, count)
            })
            .collect();

        let summary = CommissionEngine::from_manual_entries(&entries, &employees, rate);

        let total_count: Decimal = counts.iter().map(|&c| Decimal::from(c)).sum();
        prop_assert_eq!(summary.total_commission(), (total_count * rate).round_dp(2));
    }

    /// *For all* lines, payable-today holds exactly for the Normal tier.
    #[test]
    fn prop_payable_today_iff_normal_tier(
        employees in roster(),
        counts in prop::collection::vec(1u32..100, 1..12),
        rate in rate(),
    ) {
        let entries: Vec<StylistEntryDraft> = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                StylistEntryDraft::new(employees[i % employees.len()].id, count)
            })
            .collect();

        let summary = CommissionEngine::from_manual_entries(&entries, &employees, rate);

        for line in &summary.lines {
            prop_assert_eq!(line.is_payable_today, line.tier.is_payable_today());
        }
    }

    /// Manual entries are never merged: one line per entry, in entry order.
    #[test]
    fn prop_manual_lines_match_entries(
        employees in roster(),
        counts in prop::collection::vec(0u32..100, 0..12),
    ) {
        let entries: Vec<StylistEntryDraft> = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                StylistEntryDraft::new(employees[i % employees.len()].id, count)
            })
            .collect();

        let summary =
            CommissionEngine::from_manual_entries(&entries, &employees, Decimal::ONE);

        prop_assert_eq!(summary.lines.len(), entries.len());
        for (line, entry) in summary.lines.iter().zip(&entries) {
            prop_assert_eq!(line.employee_id, entry.stylist_id);
            prop_assert_eq!(line.service_count, Decimal::from(entry.service_count));
        }
    }

    /// Bucket totals partition the total commission.
    #[test]
    fn prop_buckets_partition_total(
        employees in roster(),
        counts in prop::collection::vec(1u32..100, 1..12),
        rate in rate(),
    ) {
        let entries: Vec<StylistEntryDraft> = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                StylistEntryDraft::new(employees[i % employees.len()].id, count)
            })
            .collect();

        let summary = CommissionEngine::from_manual_entries(&entries, &employees, rate);

        let line_sum: Decimal = summary.lines.iter().map(|l| l.commission_amount).sum();
        prop_assert_eq!(summary.total_payable_today + summary.total_accrued_monthly, line_sum);
    }
}
