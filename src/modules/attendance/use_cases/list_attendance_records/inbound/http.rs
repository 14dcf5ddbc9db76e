use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::auth::Caller;
use crate::shell::state::AppState;

/// Caller's records, newest date first.
pub async fn handle(State(state): State<AppState>, caller: Caller) -> impl IntoResponse {
    match state.records_handler.handle(caller.user_id()).await {
        Ok(records) => Json(records).into_response(),
        Err(error) => error.into_response(),
    }
}
