use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::attendance::use_cases::get_today_status::inbound::graphql::GqlAttendanceRecord;
use crate::shell::graphql::{caller_from, to_gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CheckOutMutation;

#[Object]
impl CheckOutMutation {
    async fn check_out(&self, context: &Context<'_>) -> GqlResult<GqlAttendanceRecord> {
        let state = context.data_unchecked::<AppState>();
        let caller = caller_from(context);
        let (now, today) = state.clock.read();

        let record = state
            .check_out_handler
            .handle(caller.as_ref(), today, now)
            .await
            .map_err(to_gql_error)?;

        Ok(record.into())
    }
}
