//! Daily-close error types.

use thiserror::Error;

use super::ports::StoreError;
use cashup_shared::types::BranchId;

/// Phase of the stylist-entry batch sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    /// Deleting entries queued for removal.
    Delete,
    /// Creating and updating the remaining entries.
    Write,
}

impl std::fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Delete => write!(f, "delete"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Errors that can occur during daily-close operations.
#[derive(Debug, Error)]
pub enum DailyCloseError {
    /// Save was attempted without a selected branch; rejected before any I/O.
    #[error("No branch selected")]
    NoBranchSelected,

    /// The selected branch is permanently closed.
    #[error("Branch {0} is permanently closed and cannot receive new entries")]
    BranchNotSelectable(BranchId),

    /// The entry batch sync failed part-way; the working set keeps its
    /// deletion queue, so retrying the save is safe.
    #[error("Stylist entry sync failed during {phase}: {source}")]
    EntrySync {
        /// Which sync phase failed.
        phase: SyncPhase,
        /// The underlying store failure.
        #[source]
        source: StoreError,
    },

    /// A store read/write failed outside the entry sync.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl DailyCloseError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoBranchSelected => "NO_BRANCH_SELECTED",
            Self::BranchNotSelectable(_) => "BRANCH_NOT_SELECTABLE",
            Self::EntrySync { .. } => "ENTRY_SYNC_FAILED",
            Self::Store(_) => "STORE_ERROR",
        }
    }

    /// Returns true if retrying the same operation may succeed.
    ///
    /// Entry-sync failures are retryable because the sync is idempotent
    /// per entry ID.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::EntrySync { .. } | Self::Store(_))
    }
}

impl From<DailyCloseError> for cashup_shared::AppError {
    fn from(err: DailyCloseError) -> Self {
        match &err {
            DailyCloseError::NoBranchSelected => Self::Validation(err.to_string()),
            DailyCloseError::BranchNotSelectable(_) => Self::BusinessRule(err.to_string()),
            DailyCloseError::EntrySync { .. } | DailyCloseError::Store(_) => {
                Self::Store(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DailyCloseError::NoBranchSelected.error_code(),
            "NO_BRANCH_SELECTED"
        );
        assert_eq!(
            DailyCloseError::EntrySync {
                phase: SyncPhase::Delete,
                source: StoreError::Backend("down".to_string()),
            }
            .error_code(),
            "ENTRY_SYNC_FAILED"
        );
    }

    #[test]
    fn test_retryable_errors() {
        assert!(DailyCloseError::Store(StoreError::Backend("down".to_string())).is_retryable());
        assert!(DailyCloseError::EntrySync {
            phase: SyncPhase::Write,
            source: StoreError::Backend("down".to_string()),
        }
        .is_retryable());
        assert!(!DailyCloseError::NoBranchSelected.is_retryable());
    }

    #[test]
    fn test_app_error_mapping() {
        let app: cashup_shared::AppError = DailyCloseError::NoBranchSelected.into();
        assert_eq!(app.status_code(), 400);

        let app: cashup_shared::AppError =
            DailyCloseError::Store(StoreError::Backend("down".to_string())).into();
        assert!(app.is_retryable());
    }

    #[test]
    fn test_sync_phase_display() {
        let err = DailyCloseError::EntrySync {
            phase: SyncPhase::Delete,
            source: StoreError::Backend("connection reset".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Stylist entry sync failed during delete: store backend failure: connection reset"
        );
    }
}
