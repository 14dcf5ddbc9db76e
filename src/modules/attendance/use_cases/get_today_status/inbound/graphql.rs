use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::attendance::core::record::AttendanceRecord;
use crate::shared::core::primitives::format_date;
use crate::shell::graphql::{caller_from, to_gql_error};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlAttendanceRecord {
    pub id: ID,
    pub user_id: String,
    pub date: String,
    pub check_in: i64,
    pub check_out: Option<i64>,
    pub working_hours: Option<f64>,
    pub overtime: Option<f64>,
}

impl From<AttendanceRecord> for GqlAttendanceRecord {
    fn from(record: AttendanceRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            user_id: record.user_id.to_string(),
            date: format_date(record.date),
            check_in: record.check_in,
            check_out: record.check_out,
            working_hours: record.working_hours,
            overtime: record.overtime,
        }
    }
}

#[derive(Default)]
pub struct TodayStatusQuery;

#[Object]
impl TodayStatusQuery {
    async fn today_status(&self, context: &Context<'_>) -> GqlResult<Option<GqlAttendanceRecord>> {
        let state = context.data_unchecked::<AppState>();
        let caller = caller_from(context);

        let record = state
            .today_status_handler
            .handle(caller.as_ref(), state.clock.today())
            .await
            .map_err(to_gql_error)?;

        Ok(record.map(Into::into))
    }
}
