use crate::modules::attendance::adapters::outbound::record_store::{
    RecordStore, RecordStoreError,
};
use crate::modules::attendance::core::decision::{DecideError, Decision};
use crate::modules::attendance::core::state::AttendanceState;
use crate::modules::attendance::use_cases::check_in::command::CheckIn;
use crate::modules::attendance::use_cases::check_in::decide::decide_check_in;
use crate::modules::attendance::use_cases::errors::{ApplicationError, require_caller};
use crate::shared::core::primitives::{EpochMillis, RecordId, UserId};
use chrono::NaiveDate;
use std::sync::Arc;

pub struct CheckInHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CheckInHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        caller: Option<&UserId>,
        today: NaiveDate,
        now: EpochMillis,
    ) -> Result<RecordId, ApplicationError> {
        let user_id = require_caller(caller)?;
        let existing = self.store.find_one(user_id, today).await?;
        let command = CheckIn {
            user_id: user_id.clone(),
            date: today,
            now,
        };

        match decide_check_in(&AttendanceState::from_record(existing), command) {
            Decision::Accepted(record) => match self.store.insert(record).await {
                Ok(id) => {
                    tracing::info!(%user_id, %today, record_id = %id, "checked in");
                    Ok(id)
                }
                // Lost the race against a concurrent check in for the same day.
                Err(RecordStoreError::Duplicate { .. }) => {
                    tracing::warn!(%user_id, %today, "concurrent check in rejected by the store");
                    Err(DecideError::AlreadyCheckedIn.into())
                }
                Err(error) => {
                    tracing::error!(%user_id, %today, %error, "check in failed");
                    Err(error.into())
                }
            },
            Decision::Rejected { reason } => {
                tracing::warn!(%user_id, %today, %reason, "check in rejected");
                Err(reason.into())
            }
        }
    }
}
