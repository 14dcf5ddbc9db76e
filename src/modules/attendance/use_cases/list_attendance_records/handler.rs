use crate::modules::attendance::adapters::outbound::record_store::{DateOrder, RecordStore};
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::attendance::use_cases::list_attendance_records::projection::AttendanceRecordView;
use crate::shared::core::primitives::UserId;
use std::sync::Arc;

pub struct ListAttendanceRecordsHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListAttendanceRecordsHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Most recent day first.
    pub async fn handle(
        &self,
        caller: Option<&UserId>,
    ) -> Result<Option<Vec<AttendanceRecordView>>, ApplicationError> {
        let Some(user_id) = caller else {
            return Ok(None);
        };
        let records = self.store.list_by_user(user_id, DateOrder::Desc).await?;
        Ok(Some(records.into_iter().map(AttendanceRecordView::from).collect()))
    }
}
