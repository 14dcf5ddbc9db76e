use crate::modules::attendance::adapters::outbound::record_store::RecordStoreError;
use crate::modules::attendance::core::decision::DecideError;
use crate::shared::core::primitives::UserId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("Not authenticated")]
    Unauthenticated,

    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error(transparent)]
    Store(#[from] RecordStoreError),
}

impl ApplicationError {
    /// Stable machine readable code for inbound adapters.
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationError::Unauthenticated => "UNAUTHENTICATED",
            ApplicationError::Rejected(DecideError::AlreadyCheckedIn) => "ALREADY_CHECKED_IN",
            ApplicationError::Rejected(DecideError::NoCheckInFound) => "NO_CHECK_IN_FOUND",
            ApplicationError::Rejected(DecideError::AlreadyCheckedOut) => "ALREADY_CHECKED_OUT",
            ApplicationError::Store(_) => "STORE_FAILURE",
        }
    }
}

/// Mutations reject a missing caller.
pub fn require_caller(caller: Option<&UserId>) -> Result<&UserId, ApplicationError> {
    caller.ok_or(ApplicationError::Unauthenticated)
}
