use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::shell::auth::Caller;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ResetOvertimeResponse {
    pub reset: usize,
}

pub async fn handle(State(state): State<AppState>, caller: Caller) -> impl IntoResponse {
    match state.reset_overtime_handler.handle(caller.user_id()).await {
        Ok(reset) => Json(ResetOvertimeResponse { reset }).into_response(),
        Err(error) => error.into_response(),
    }
}
