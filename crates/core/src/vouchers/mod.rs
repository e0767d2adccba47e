//! Read-only upstream transaction feed types.
//!
//! Vouchers come from the bookkeeping system upstream of this core. They are
//! consumed for autofill suggestions and transactional commission counts and
//! are never written here.

pub mod types;

pub use types::{Voucher, VoucherItem, VoucherStatus, VoucherType};
