//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing an `EmployeeId` where a
//! `BranchId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(CompanyId, "Unique identifier for a company (tenant).");
typed_id!(BranchId, "Unique identifier for a branch.");
typed_id!(EmployeeId, "Unique identifier for an employee.");
typed_id!(UserId, "Unique identifier for an application user.");
typed_id!(DailyRecordId, "Unique identifier for a daily cash-up record.");
typed_id!(
    StylistEntryId,
    "Unique identifier for a stylist service-count entry."
);
typed_id!(VoucherId, "Unique identifier for an upstream voucher.");
typed_id!(VoucherItemId, "Unique identifier for an upstream voucher line.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_creation() {
        let id = BranchId::new();
        assert!(!id.to_string().is_empty());
    }

    #[test]
    fn test_typed_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = EmployeeId::from_uuid(uuid);
        assert_eq!(id.into_inner(), uuid);
    }

    #[test]
    fn test_typed_id_roundtrip_str() {
        let id = DailyRecordId::new();
        let parsed = DailyRecordId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_typed_id_serde_transparent() {
        let id = StylistEntryId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.0));
    }

    #[test]
    fn test_v7_ids_are_time_ordered() {
        let a = VoucherId::new();
        let b = VoucherId::new();
        assert!(a.0 <= b.0);
    }
}
