use axum::{Json, response::IntoResponse};
use serde::Serialize;

use crate::shell::auth::Caller;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerResponse {
    pub user_id: String,
}

pub async fn handle(caller: Caller) -> impl IntoResponse {
    Json(caller.0.map(|user_id| CallerResponse {
        user_id: user_id.to_string(),
    }))
}
