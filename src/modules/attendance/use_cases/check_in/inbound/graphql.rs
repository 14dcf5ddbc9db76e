use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::shell::graphql::{caller_from, to_gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CheckInMutation;

#[Object]
impl CheckInMutation {
    /// Starts today's record for the caller and returns its id.
    async fn check_in(&self, context: &Context<'_>) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let caller = caller_from(context);
        let (now, today) = state.clock.read();

        let record_id = state
            .check_in_handler
            .handle(caller.as_ref(), today, now)
            .await
            .map_err(to_gql_error)?;

        Ok(ID(record_id.to_string()))
    }
}
