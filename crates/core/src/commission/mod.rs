//! Staff service-commission engine.
//!
//! Computes per-employee payout lines under two mutually exclusive
//! data-entry modes: derived from transactional sales records, or from
//! manually entered stylist tallies. The active mode is a company-level
//! setting supplied by the caller, never decided here.

pub mod engine;
pub mod types;

pub use cashup_shared::config::CommissionMode;
pub use engine::CommissionEngine;
pub use types::{CommissionLine, CommissionSummary, Tier};

#[cfg(test)]
mod props;
