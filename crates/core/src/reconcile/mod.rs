//! Daily cash reconciliation calculator.
//!
//! Pure functions turning raw entry fields into totals, expected (system)
//! cash, and the variance against the physically counted balance. Called on
//! every field change for live preview and once more at save time.

pub mod calculator;
pub mod types;

pub use calculator::ReconcileService;
pub use types::{AutofillOutcome, AutofillSuggestion, DailyFields, DailyTotals};

#[cfg(test)]
mod props;
