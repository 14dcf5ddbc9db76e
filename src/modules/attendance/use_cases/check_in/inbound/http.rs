use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use serde::Serialize;

use crate::shared::core::primitives::EpochMillis;
use crate::shell::auth::Caller;
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResponse {
    pub record_id: String,
    pub date: NaiveDate,
    pub check_in: EpochMillis,
}

pub async fn handle(State(state): State<AppState>, caller: Caller) -> impl IntoResponse {
    let (now, today) = state.clock.read();

    match state
        .check_in_handler
        .handle(caller.user_id(), today, now)
        .await
    {
        Ok(record_id) => (
            StatusCode::CREATED,
            Json(CheckInResponse {
                record_id: record_id.to_string(),
                date: today,
                check_in: now,
            }),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
