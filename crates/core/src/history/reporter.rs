//! History filtering and export flattening.

use super::types::{ExportTable, HistoryQuery, HistoryRow};
use crate::dailyclose::DailyRecord;
use crate::reconcile::ReconcileService;

/// Service for history display and export.
pub struct HistoryReporter;

impl HistoryReporter {
    /// Filters records to the query's branch and inclusive date range,
    /// sorted descending by date.
    ///
    /// `total_outflow` is recomputed per row rather than trusting a
    /// possibly-stale persisted derived value.
    #[must_use]
    pub fn filter_rows(records: Vec<DailyRecord>, query: &HistoryQuery) -> Vec<HistoryRow> {
        let mut rows: Vec<HistoryRow> = records
            .into_iter()
            .filter(|r| {
                query.branch_id.is_none_or(|b| r.branch_id == b)
                    && r.date >= query.from
                    && r.date <= query.to
            })
            .map(|record| {
                let total_outflow = ReconcileService::reconcile(&record.fields).total_outflow;
                HistoryRow {
                    record,
                    total_outflow,
                }
            })
            .collect();

        rows.sort_by(|a, b| b.record.date.cmp(&a.record.date));
        rows
    }

    /// Flattens history rows into a display-string table for the external
    /// spreadsheet/print collaborator.
    #[must_use]
    pub fn export(rows: &[HistoryRow]) -> ExportTable {
        let headers = [
            "Date",
            "Branch",
            "Opening Cash",
            "Cash Received",
            "Cash Sales",
            "Total Sales",
            "Total Outflow",
            "System Cash",
            "Actual Cash",
            "Difference",
            "Status",
            "Deposited By",
            "Notes",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        let body = rows
            .iter()
            .map(|row| {
                let r = &row.record;
                vec![
                    r.date.to_string(),
                    r.branch_id.to_string(),
                    r.fields.opening_cash.to_string(),
                    r.fields.cash_received.to_string(),
                    r.fields.cash_sales.to_string(),
                    r.total_sales.to_string(),
                    row.total_outflow.to_string(),
                    r.closing_cash_system.to_string(),
                    r.fields.closing_cash_actual.to_string(),
                    r.difference.to_string(),
                    r.status.to_string(),
                    r.deposited_by.clone(),
                    r.notes.clone(),
                ]
            })
            .collect();

        ExportTable {
            headers,
            rows: body,
        }
    }
}
