//! Branch and employee master-data types.

use cashup_shared::types::{BranchId, EmployeeId};
use serde::{Deserialize, Serialize};

/// Operational status of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchStatus {
    /// Branch is open for business.
    Active,
    /// Branch is temporarily inactive.
    Inactive,
    /// Branch has been permanently closed and must not receive new entries.
    PermanentlyClosed,
}

/// A retail/services branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    /// The branch ID.
    pub id: BranchId,
    /// Display name.
    pub name: String,
    /// Operational status.
    pub status: BranchStatus,
}

impl Branch {
    /// Returns true if new daily entries may be recorded for this branch.
    ///
    /// Inactive branches remain selectable so that back-dated corrections
    /// stay possible; only permanently closed branches are excluded.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !matches!(self.status, BranchStatus::PermanentlyClosed)
    }
}

/// A staff member who can render services and earn commission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// The employee ID.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Whether the employee is currently employed.
    pub is_active: bool,
    /// "Pro" staff accrue commission monthly instead of being paid same-day.
    pub is_dual_commission_eligible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BranchStatus::Active, true)]
    #[case(BranchStatus::Inactive, true)]
    #[case(BranchStatus::PermanentlyClosed, false)]
    fn test_branch_selectability(#[case] status: BranchStatus, #[case] selectable: bool) {
        let branch = Branch {
            id: BranchId::new(),
            name: "Downtown".to_string(),
            status,
        };
        assert_eq!(branch.is_selectable(), selectable);
    }

    #[test]
    fn test_branch_status_serde_snake_case() {
        let json = serde_json::to_string(&BranchStatus::PermanentlyClosed).unwrap();
        assert_eq!(json, "\"permanently_closed\"");
    }
}
