use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::graphql::{caller_from, to_gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ResetOvertimeMutation;

#[Object]
impl ResetOvertimeMutation {
    /// Zeroes the caller's overtime on every record. Returns the number of records changed.
    async fn reset_specific_stats(&self, context: &Context<'_>) -> GqlResult<usize> {
        let state = context.data_unchecked::<AppState>();
        let caller = caller_from(context);

        state
            .reset_overtime_handler
            .handle(caller.as_ref())
            .await
            .map_err(to_gql_error)
    }
}
