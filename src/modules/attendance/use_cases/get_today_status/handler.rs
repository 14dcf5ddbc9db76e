use crate::modules::attendance::adapters::outbound::record_store::RecordStore;
use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::UserId;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct GetTodayStatusHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetTodayStatusHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// `None` for an anonymous caller and for a day without a check in.
    pub async fn handle(
        &self,
        caller: Option<&UserId>,
        today: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, ApplicationError> {
        let Some(user_id) = caller else {
            return Ok(None);
        };
        Ok(self.store.find_one(user_id, today).await?)
    }
}
