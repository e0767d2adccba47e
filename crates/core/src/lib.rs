//! Core business logic for Cashup.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, calculation rules, and the daily-close lifecycle live here.
//!
//! # Modules
//!
//! - `master` - Read-only master data (branches, employees)
//! - `vouchers` - Read-only upstream transaction feed types
//! - `reconcile` - Daily cash reconciliation calculator
//! - `commission` - Staff service-commission engine
//! - `dailyclose` - Daily record lifecycle (load, draft, close, entry sync)
//! - `history` - Range-filtered history querying and export flattening

pub mod commission;
pub mod dailyclose;
pub mod history;
pub mod master;
pub mod reconcile;
pub mod vouchers;
