//! Property-based tests for the reconciliation arithmetic.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::ReconcileService;
use super::types::DailyFields;

/// Strategy to generate a non-negative amount with 2 decimal places.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate any counted actual, including negatives.
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn fields_strategy() -> impl Strategy<Value = DailyFields> {
    (
        amount(),
        amount(),
        amount(),
        amount(),
        amount(),
        amount(),
        amount(),
        amount(),
        amount(),
        amount(),
        signed_amount(),
    )
        .prop_map(
            |(
                opening_cash,
                cash_received,
                cash_sales,
                expenses,
                drawings,
                purchases,
                employee_expenses,
                bank_transfer,
                mada_pos,
                online_order_sales,
                closing_cash_actual,
            )| DailyFields {
                opening_cash,
                cash_received,
                cash_sales,
                expenses,
                drawings,
                purchases,
                employee_expenses,
                bank_transfer,
                mada_pos,
                online_order_sales,
                closing_cash_actual,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* non-negative inputs, system cash equals the inflow/outflow
    /// identity exactly (inputs already carry 2dp, so rounding is a no-op).
    #[test]
    fn prop_system_cash_identity(fields in fields_strategy()) {
        let totals = ReconcileService::reconcile(&fields);
        let expected = fields.opening_cash + fields.cash_received + fields.cash_sales
            - (fields.expenses + fields.drawings + fields.purchases + fields.employee_expenses);
        prop_assert_eq!(totals.system_cash, expected);
    }

    /// *For any* counted actual, including negatives,
    /// difference = actual - system cash.
    #[test]
    fn prop_difference_identity(fields in fields_strategy()) {
        let totals = ReconcileService::reconcile(&fields);
        prop_assert_eq!(totals.difference, fields.closing_cash_actual - totals.system_cash);
    }

    /// Reconciliation is a pure function: identical inputs, identical output.
    #[test]
    fn prop_reconcile_is_idempotent(fields in fields_strategy()) {
        let first = ReconcileService::reconcile(&fields);
        let second = ReconcileService::reconcile(&fields);
        prop_assert_eq!(first, second);
    }

    /// Total sales covers every settlement channel and nothing else.
    #[test]
    fn prop_total_sales_identity(fields in fields_strategy()) {
        let totals = ReconcileService::reconcile(&fields);
        let expected = fields.cash_sales + fields.bank_transfer + fields.mada_pos
            + fields.online_order_sales;
        prop_assert_eq!(totals.total_sales, expected);
    }
}
