use crate::modules::attendance::adapters::outbound::record_store::{
    RecordStore, RecordStoreError,
};
use crate::modules::attendance::core::decision::{DecideError, Decision};
use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::core::state::AttendanceState;
use crate::modules::attendance::use_cases::check_out::command::CheckOut;
use crate::modules::attendance::use_cases::check_out::decide::decide_check_out;
use crate::modules::attendance::use_cases::errors::{ApplicationError, require_caller};
use crate::shared::core::primitives::{EpochMillis, UserId};
use chrono::NaiveDate;
use std::sync::Arc;

pub struct CheckOutHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CheckOutHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Closes today's record and returns it with the derived fields filled in.
    pub async fn handle(
        &self,
        caller: Option<&UserId>,
        today: NaiveDate,
        now: EpochMillis,
    ) -> Result<AttendanceRecord, ApplicationError> {
        let user_id = require_caller(caller)?;
        let existing = self.store.find_one(user_id, today).await?;
        let command = CheckOut {
            user_id: user_id.clone(),
            date: today,
            now,
        };

        match decide_check_out(&AttendanceState::from_record(existing), command) {
            Decision::Accepted((id, patch)) => match self.store.patch(&id, patch).await {
                Ok(record) => {
                    tracing::info!(
                        %user_id,
                        %today,
                        working_hours = ?record.working_hours,
                        overtime = ?record.overtime,
                        "checked out"
                    );
                    Ok(record)
                }
                Err(RecordStoreError::CheckOutAlreadySet(_)) => {
                    tracing::warn!(%user_id, %today, "concurrent check out rejected by the store");
                    Err(DecideError::AlreadyCheckedOut.into())
                }
                Err(error) => {
                    tracing::error!(%user_id, %today, %error, "check out failed");
                    Err(error.into())
                }
            },
            Decision::Rejected { reason } => {
                tracing::warn!(%user_id, %today, %reason, "check out rejected");
                Err(reason.into())
            }
        }
    }
}
