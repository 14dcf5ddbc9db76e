use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::auth::Caller;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, caller: Caller) -> impl IntoResponse {
    match state.stats_handler.handle(caller.user_id()).await {
        Ok(stats) => Json(stats).into_response(),
        Err(error) => error.into_response(),
    }
}
