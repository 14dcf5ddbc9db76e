use crate::modules::attendance::adapters::outbound::record_store::{DateOrder, RecordStore};
use crate::modules::attendance::core::rules::{AttendanceStats, aggregate_stats};
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::UserId;
use std::sync::Arc;

pub struct GetStatsHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetStatsHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        caller: Option<&UserId>,
    ) -> Result<Option<AttendanceStats>, ApplicationError> {
        let Some(user_id) = caller else {
            return Ok(None);
        };
        let records = self.store.list_by_user(user_id, DateOrder::Asc).await?;
        Ok(Some(aggregate_stats(&records)))
    }
}
