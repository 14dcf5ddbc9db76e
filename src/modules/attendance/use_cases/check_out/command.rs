use crate::shared::core::primitives::{EpochMillis, UserId};
use chrono::NaiveDate;

/// Intent to end the working day that was started on `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOut {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub now: EpochMillis,
}
