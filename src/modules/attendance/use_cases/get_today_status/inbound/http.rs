use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::auth::Caller;
use crate::shell::state::AppState;

/// Today's record, or JSON `null` when there is none or the caller is anonymous.
pub async fn handle(State(state): State<AppState>, caller: Caller) -> impl IntoResponse {
    let today = state.clock.today();

    match state
        .today_status_handler
        .handle(caller.user_id(), today)
        .await
    {
        Ok(record) => Json(record).into_response(),
        Err(error) => error.into_response(),
    }
}
