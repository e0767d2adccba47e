//! Reconciliation input and output types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw monetary entry fields for one branch-date, as entered by staff.
///
/// Every field defaults to zero; blank or malformed form inputs are coerced
/// to zero by [`crate::reconcile::ReconcileService::parse_amount`] before
/// they land here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyFields {
    /// Cash in the till at the start of the day.
    pub opening_cash: Decimal,
    /// Cash deposited into the till/bank from external sources.
    pub cash_received: Decimal,
    /// Cash sales for the day.
    pub cash_sales: Decimal,
    /// Operating expenses paid out in cash.
    pub expenses: Decimal,
    /// Owner drawings.
    pub drawings: Decimal,
    /// Purchases paid out in cash.
    pub purchases: Decimal,
    /// Staff-related payouts (including same-day commission).
    pub employee_expenses: Decimal,
    /// Sales settled by bank transfer.
    pub bank_transfer: Decimal,
    /// Sales settled by card terminal.
    pub mada_pos: Decimal,
    /// Sales settled through online ordering platforms.
    pub online_order_sales: Decimal,
    /// Physically counted cash at close; zero means "not yet counted".
    pub closing_cash_actual: Decimal,
}

/// Derived totals for one branch-date.
///
/// Always recomputed from [`DailyFields`]; never accepted as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotals {
    /// Revenue across all settlement channels.
    pub total_sales: Decimal,
    /// Cash leaving the till across all outflow categories.
    pub total_outflow: Decimal,
    /// The cash balance the books predict should be on hand.
    pub system_cash: Decimal,
    /// Counted cash minus system cash; negative means a shortfall.
    pub difference: Decimal,
    /// False while `closing_cash_actual` is unset/zero, in which case the
    /// variance should not be displayed (the `difference` value is still
    /// computed and stored).
    pub actual_counted: bool,
}

/// Field suggestions derived from the day's vouchers.
///
/// Suggestions never overwrite entered fields on their own; applying them
/// is a separate explicit action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutofillSuggestion {
    /// Sum of posted sales voucher amounts.
    pub cash_sales: Decimal,
    /// Sum of posted receipt voucher amounts.
    pub cash_received: Decimal,
    /// Sum of posted purchase voucher amounts.
    pub purchases: Decimal,
    /// Sum of posted payment voucher amounts.
    pub expenses: Decimal,
}

/// Outcome of an on-demand autofill request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutofillOutcome {
    /// No effective vouchers exist for the branch-date; surfaced to the
    /// user as a notice, not an error.
    NoVouchers,
    /// Suggestions computed from the day's vouchers.
    Suggested(AutofillSuggestion),
}

impl AutofillOutcome {
    /// Returns the suggestion, if any vouchers were found.
    #[must_use]
    pub fn suggestion(&self) -> Option<AutofillSuggestion> {
        match self {
            Self::NoVouchers => None,
            Self::Suggested(s) => Some(*s),
        }
    }
}
