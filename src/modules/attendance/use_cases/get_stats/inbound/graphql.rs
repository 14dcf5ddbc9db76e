use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::attendance::core::rules::AttendanceStats;
use crate::shell::graphql::{caller_from, to_gql_error};
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlAttendanceStats {
    pub total_days: u64,
    pub average_hours: f64,
    pub total_overtime: f64,
    pub compensatory_days: u64,
}

impl From<AttendanceStats> for GqlAttendanceStats {
    fn from(stats: AttendanceStats) -> Self {
        Self {
            total_days: stats.total_days,
            average_hours: stats.average_hours,
            total_overtime: stats.total_overtime,
            compensatory_days: stats.compensatory_days,
        }
    }
}

#[derive(Default)]
pub struct StatsQuery;

#[Object]
impl StatsQuery {
    async fn stats(&self, context: &Context<'_>) -> GqlResult<Option<GqlAttendanceStats>> {
        let state = context.data_unchecked::<AppState>();
        let caller = caller_from(context);

        let stats = state
            .stats_handler
            .handle(caller.as_ref())
            .await
            .map_err(to_gql_error)?;

        Ok(stats.map(Into::into))
    }
}
