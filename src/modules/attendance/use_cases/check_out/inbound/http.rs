use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::auth::Caller;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, caller: Caller) -> impl IntoResponse {
    let (now, today) = state.clock.read();

    match state
        .check_out_handler
        .handle(caller.user_id(), today, now)
        .await
    {
        Ok(record) => Json(record).into_response(),
        Err(error) => error.into_response(),
    }
}
