//! Read-only master data types.
//!
//! Branches and employees are created and edited by the back-office CRUD
//! screens upstream of this core; here they are inputs only.

pub mod types;

pub use types::{Branch, BranchStatus, Employee};
