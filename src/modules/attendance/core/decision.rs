#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum DecideError {
    #[error("Already checked in today")]
    AlreadyCheckedIn,

    #[error("No check-in found for today")]
    NoCheckInFound,

    #[error("Already checked out today")]
    AlreadyCheckedOut,
}

/// Outcome of a pure decision. `Accepted` carries the write the handler applies to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision<TWrite> {
    Accepted(TWrite),
    Rejected { reason: DecideError },
}
