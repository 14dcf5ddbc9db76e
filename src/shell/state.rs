use crate::modules::attendance::adapters::outbound::record_store_in_memory::InMemoryRecordStore;
use crate::modules::attendance::use_cases::check_in::handler::CheckInHandler;
use crate::modules::attendance::use_cases::check_out::handler::CheckOutHandler;
use crate::modules::attendance::use_cases::get_stats::handler::GetStatsHandler;
use crate::modules::attendance::use_cases::get_today_status::handler::GetTodayStatusHandler;
use crate::modules::attendance::use_cases::list_attendance_records::handler::ListAttendanceRecordsHandler;
use crate::modules::attendance::use_cases::reset_overtime::handler::ResetOvertimeHandler;
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::identity::Authenticator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<dyn Authenticator>,
    pub clock: Arc<dyn Clock>,
    pub check_in_handler: Arc<CheckInHandler<InMemoryRecordStore>>,
    pub check_out_handler: Arc<CheckOutHandler<InMemoryRecordStore>>,
    pub today_status_handler: Arc<GetTodayStatusHandler<InMemoryRecordStore>>,
    pub stats_handler: Arc<GetStatsHandler<InMemoryRecordStore>>,
    pub records_handler: Arc<ListAttendanceRecordsHandler<InMemoryRecordStore>>,
    pub reset_overtime_handler: Arc<ResetOvertimeHandler<InMemoryRecordStore>>,
}

impl AppState {
    pub fn new(
        store: Arc<InMemoryRecordStore>,
        authenticator: Arc<dyn Authenticator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            authenticator,
            clock,
            check_in_handler: Arc::new(CheckInHandler::new(store.clone())),
            check_out_handler: Arc::new(CheckOutHandler::new(store.clone())),
            today_status_handler: Arc::new(GetTodayStatusHandler::new(store.clone())),
            stats_handler: Arc::new(GetStatsHandler::new(store.clone())),
            records_handler: Arc::new(ListAttendanceRecordsHandler::new(store.clone())),
            reset_overtime_handler: Arc::new(ResetOvertimeHandler::new(store)),
        }
    }
}
