// Intent to start the working day for one user.
//
// `date` and `now` are resolved by the inbound adapter from the clock, never inside the use case.

use crate::shared::core::primitives::{EpochMillis, UserId};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub now: EpochMillis,
}
