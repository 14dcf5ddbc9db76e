use async_graphql::{Context, Object};

use crate::shell::graphql::caller_from;

#[derive(Default)]
pub struct CallerQuery;

#[Object]
impl CallerQuery {
    /// Identifier of the authenticated caller, if any.
    async fn me(&self, context: &Context<'_>) -> Option<String> {
        caller_from(context).map(|user_id| user_id.to_string())
    }
}
