use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::attendance::use_cases::list_attendance_records::projection::AttendanceRecordView;
use crate::shared::core::primitives::format_date;
use crate::shell::graphql::{caller_from, to_gql_error};
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlAttendanceRecordView {
    pub date: String,
    pub check_in: i64,
    pub check_out: Option<i64>,
    pub working_hours: Option<f64>,
    pub overtime: Option<f64>,
}

impl From<AttendanceRecordView> for GqlAttendanceRecordView {
    fn from(view: AttendanceRecordView) -> Self {
        Self {
            date: format_date(view.date),
            check_in: view.check_in,
            check_out: view.check_out,
            working_hours: view.working_hours,
            overtime: view.overtime,
        }
    }
}

#[derive(Default)]
pub struct AttendanceRecordsQuery;

#[Object]
impl AttendanceRecordsQuery {
    async fn attendance_records(
        &self,
        context: &Context<'_>,
    ) -> GqlResult<Option<Vec<GqlAttendanceRecordView>>> {
        let state = context.data_unchecked::<AppState>();
        let caller = caller_from(context);

        let records = state
            .records_handler
            .handle(caller.as_ref())
            .await
            .map_err(to_gql_error)?;

        Ok(records.map(|views| views.into_iter().map(Into::into).collect()))
    }
}
