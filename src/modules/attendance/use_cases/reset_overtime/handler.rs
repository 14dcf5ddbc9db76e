use crate::modules::attendance::adapters::outbound::record_store::{DateOrder, RecordStore};
use crate::modules::attendance::use_cases::errors::{ApplicationError, require_caller};
use crate::modules::attendance::use_cases::reset_overtime::decide::decide_overtime_resets;
use crate::shared::core::primitives::UserId;
use std::sync::Arc;

pub struct ResetOvertimeHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ResetOvertimeHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Zeroes the overtime of every record of the caller. Returns how many records changed.
    pub async fn handle(&self, caller: Option<&UserId>) -> Result<usize, ApplicationError> {
        let user_id = require_caller(caller)?;
        let records = self.store.list_by_user(user_id, DateOrder::Asc).await?;

        let resets = decide_overtime_resets(&records);
        let count = match self.store.patch_many(resets).await {
            Ok(count) => count,
            Err(error) => {
                tracing::error!(%user_id, %error, "overtime reset failed");
                return Err(error.into());
            }
        };

        tracing::info!(%user_id, reset = count, "overtime reset");
        Ok(count)
    }
}
