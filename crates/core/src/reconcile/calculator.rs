//! Reconciliation calculation service.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::types::{AutofillOutcome, AutofillSuggestion, DailyFields, DailyTotals};
use crate::vouchers::{Voucher, VoucherType};

/// Reconciliation service for daily cash-up arithmetic.
///
/// All methods are pure; the service holds no state and performs no I/O.
pub struct ReconcileService;

impl ReconcileService {
    /// Parses a user-entered amount field.
    ///
    /// Blank and malformed inputs coerce to zero so live preview never
    /// fails mid-typing. Thousands separators are tolerated.
    #[must_use]
    pub fn parse_amount(raw: &str) -> Decimal {
        let cleaned = raw.trim().replace(',', "");
        if cleaned.is_empty() {
            return Decimal::ZERO;
        }
        Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
    }

    /// Computes the derived totals for one branch-date.
    ///
    /// - `total_sales` = cash + bank transfer + card + online sales
    /// - `total_outflow` = expenses + drawings + purchases + employee expenses
    /// - `system_cash` = opening + cash received + cash sales - total outflow
    /// - `difference` = counted closing cash - system cash (may be negative)
    ///
    /// Rounding is applied once per derived quantity, never per term.
    #[must_use]
    pub fn reconcile(fields: &DailyFields) -> DailyTotals {
        let total_sales = (fields.cash_sales
            + fields.bank_transfer
            + fields.mada_pos
            + fields.online_order_sales)
            .round_dp(2);

        let total_outflow = (fields.expenses
            + fields.drawings
            + fields.purchases
            + fields.employee_expenses)
            .round_dp(2);

        let system_cash = (fields.opening_cash + fields.cash_received + fields.cash_sales
            - (fields.expenses + fields.drawings + fields.purchases + fields.employee_expenses))
            .round_dp(2);

        let difference = (fields.closing_cash_actual - system_cash).round_dp(2);

        DailyTotals {
            total_sales,
            total_outflow,
            system_cash,
            difference,
            actual_counted: !fields.closing_cash_actual.is_zero(),
        }
    }

    /// Folds the day's vouchers into field suggestions.
    ///
    /// Cancelled vouchers are skipped. The caller is responsible for
    /// scoping the voucher list to the branch-date.
    #[must_use]
    pub fn suggest_from_vouchers(vouchers: &[Voucher]) -> AutofillOutcome {
        let effective: Vec<&Voucher> = vouchers.iter().filter(|v| v.is_effective()).collect();
        if effective.is_empty() {
            return AutofillOutcome::NoVouchers;
        }

        let mut suggestion = AutofillSuggestion::default();
        for voucher in effective {
            match voucher.voucher_type {
                VoucherType::Sales => suggestion.cash_sales += voucher.net_amount,
                VoucherType::Receipt => suggestion.cash_received += voucher.net_amount,
                VoucherType::Purchase => suggestion.purchases += voucher.net_amount,
                VoucherType::Payment => suggestion.expenses += voucher.net_amount,
                VoucherType::Journal => {}
            }
        }

        AutofillOutcome::Suggested(suggestion)
    }
}

impl DailyFields {
    /// Applies an autofill suggestion onto the entered fields.
    ///
    /// Explicit user action only; suggested values replace the four
    /// voucher-derived fields and leave everything else untouched.
    pub fn apply_suggestion(&mut self, suggestion: &AutofillSuggestion) {
        self.cash_sales = suggestion.cash_sales;
        self.cash_received = suggestion.cash_received;
        self.purchases = suggestion.purchases;
        self.expenses = suggestion.expenses;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashup_shared::types::{BranchId, VoucherId};
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use crate::vouchers::VoucherStatus;

    fn make_voucher(voucher_type: VoucherType, amount: Decimal, status: VoucherStatus) -> Voucher {
        Voucher {
            id: VoucherId::new(),
            branch_id: BranchId::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            voucher_type,
            status,
            net_amount: amount,
        }
    }

    #[rstest]
    #[case("", dec!(0))]
    #[case("   ", dec!(0))]
    #[case("abc", dec!(0))]
    #[case("12.50", dec!(12.50))]
    #[case(" 1,250.75 ", dec!(1250.75))]
    #[case("-3", dec!(-3))]
    fn test_parse_amount(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(ReconcileService::parse_amount(raw), expected);
    }

    #[test]
    fn test_reconcile_reference_scenario() {
        // opening 1000, received 200, cash sales 300,
        // expenses 100 + drawings 50 + purchases 150 => outflow 300
        let fields = DailyFields {
            opening_cash: dec!(1000),
            cash_received: dec!(200),
            cash_sales: dec!(300),
            expenses: dec!(100),
            drawings: dec!(50),
            purchases: dec!(150),
            closing_cash_actual: dec!(1150),
            ..DailyFields::default()
        };

        let totals = ReconcileService::reconcile(&fields);
        assert_eq!(totals.total_outflow, dec!(300));
        assert_eq!(totals.system_cash, dec!(1200));
        assert_eq!(totals.difference, dec!(-50));
        assert!(totals.actual_counted);
    }

    #[test]
    fn test_total_sales_spans_all_channels() {
        let fields = DailyFields {
            cash_sales: dec!(100),
            bank_transfer: dec!(25),
            mada_pos: dec!(50),
            online_order_sales: dec!(10),
            ..DailyFields::default()
        };

        let totals = ReconcileService::reconcile(&fields);
        assert_eq!(totals.total_sales, dec!(185));
    }

    #[test]
    fn test_uncounted_actual_suppresses_variance_display() {
        let fields = DailyFields {
            opening_cash: dec!(500),
            ..DailyFields::default()
        };

        let totals = ReconcileService::reconcile(&fields);
        assert!(!totals.actual_counted);
        // Difference is still computed against the zero actual.
        assert_eq!(totals.difference, dec!(-500));
    }

    #[test]
    fn test_reconcile_all_defaults_is_zero() {
        let totals = ReconcileService::reconcile(&DailyFields::default());
        assert_eq!(totals.total_sales, Decimal::ZERO);
        assert_eq!(totals.total_outflow, Decimal::ZERO);
        assert_eq!(totals.system_cash, Decimal::ZERO);
        assert_eq!(totals.difference, Decimal::ZERO);
    }

    #[test]
    fn test_suggest_from_vouchers_by_type() {
        let vouchers = vec![
            make_voucher(VoucherType::Sales, dec!(120), VoucherStatus::Posted),
            make_voucher(VoucherType::Sales, dec!(80), VoucherStatus::Posted),
            make_voucher(VoucherType::Receipt, dec!(40), VoucherStatus::Posted),
            make_voucher(VoucherType::Purchase, dec!(60), VoucherStatus::Posted),
            make_voucher(VoucherType::Payment, dec!(15), VoucherStatus::Posted),
        ];

        let outcome = ReconcileService::suggest_from_vouchers(&vouchers);
        let suggestion = outcome.suggestion().unwrap();
        assert_eq!(suggestion.cash_sales, dec!(200));
        assert_eq!(suggestion.cash_received, dec!(40));
        assert_eq!(suggestion.purchases, dec!(60));
        assert_eq!(suggestion.expenses, dec!(15));
    }

    #[test]
    fn test_suggest_skips_cancelled_vouchers() {
        let vouchers = vec![
            make_voucher(VoucherType::Sales, dec!(120), VoucherStatus::Posted),
            make_voucher(VoucherType::Sales, dec!(999), VoucherStatus::Cancelled),
        ];

        let outcome = ReconcileService::suggest_from_vouchers(&vouchers);
        assert_eq!(outcome.suggestion().unwrap().cash_sales, dec!(120));
    }

    #[test]
    fn test_suggest_with_no_vouchers() {
        assert_eq!(
            ReconcileService::suggest_from_vouchers(&[]),
            AutofillOutcome::NoVouchers
        );

        // All-cancelled days degrade to the same notice.
        let cancelled = vec![make_voucher(
            VoucherType::Sales,
            dec!(50),
            VoucherStatus::Cancelled,
        )];
        assert_eq!(
            ReconcileService::suggest_from_vouchers(&cancelled),
            AutofillOutcome::NoVouchers
        );
    }

    #[test]
    fn test_apply_suggestion_replaces_only_voucher_fields() {
        let mut fields = DailyFields {
            opening_cash: dec!(1000),
            cash_sales: dec!(1),
            ..DailyFields::default()
        };
        let suggestion = AutofillSuggestion {
            cash_sales: dec!(200),
            cash_received: dec!(40),
            purchases: dec!(60),
            expenses: dec!(15),
        };

        fields.apply_suggestion(&suggestion);
        assert_eq!(fields.cash_sales, dec!(200));
        assert_eq!(fields.cash_received, dec!(40));
        assert_eq!(fields.purchases, dec!(60));
        assert_eq!(fields.expenses, dec!(15));
        assert_eq!(fields.opening_cash, dec!(1000));
    }
}
