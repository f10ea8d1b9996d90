use lostfound_contracts::document::StoreError;
use lostfound_model::{ErrorInfo, UserId};
use thiserror::Error;

/// Why a profile load did not produce a profile.
///
/// The user-facing wording collapses every store failure into one generic
/// message; the underlying [`StoreError`] is kept here for logging only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("no profile document for user {0}")]
    NotFound(UserId),

    #[error("profile fetch failed")]
    FetchFailure(#[source] StoreError),

    #[error("no signed-in user")]
    Unauthenticated,
}

impl ProfileError {
    pub const NOT_FOUND_MESSAGE: &'static str = "User Information not found";
    pub const FETCH_FAILED_MESSAGE: &'static str = "Data fetching failed";
    pub const UNAUTHENTICATED_MESSAGE: &'static str = "You are not signed in";

    /// Alert payload shown for this failure.
    pub fn error_info(&self) -> ErrorInfo {
        match self {
            ProfileError::NotFound(_) => {
                ErrorInfo::error(Self::NOT_FOUND_MESSAGE)
            }
            ProfileError::FetchFailure(_) => {
                ErrorInfo::error(Self::FETCH_FAILED_MESSAGE)
            }
            ProfileError::Unauthenticated => {
                ErrorInfo::error(Self::UNAUTHENTICATED_MESSAGE)
            }
        }
    }
}

impl From<StoreError> for ProfileError {
    fn from(err: StoreError) -> Self {
        ProfileError::FetchFailure(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failures_share_one_message() {
        let timeout = ProfileError::from(StoreError::Timeout).error_info();
        let denied =
            ProfileError::from(StoreError::PermissionDenied("rules".into()))
                .error_info();

        assert_eq!(timeout, denied);
        assert_eq!(timeout.title, "Error");
        assert_eq!(timeout.message, "Data fetching failed");
    }

    #[test]
    fn not_found_has_fixed_wording() {
        let info =
            ProfileError::NotFound(UserId::new("u999").unwrap()).error_info();
        assert_eq!(info, ErrorInfo::new("Error", "User Information not found"));
    }
}
