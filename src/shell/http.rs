use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::modules::attendance::use_cases::check_in::inbound::http as check_in_http;
use crate::modules::attendance::use_cases::check_out::inbound::http as check_out_http;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::attendance::use_cases::get_caller::inbound::http as get_caller_http;
use crate::modules::attendance::use_cases::get_stats::inbound::http as get_stats_http;
use crate::modules::attendance::use_cases::get_today_status::inbound::http as get_today_status_http;
use crate::modules::attendance::use_cases::list_attendance_records::inbound::http as list_records_http;
use crate::modules::attendance::use_cases::reset_overtime::inbound::http as reset_overtime_http;
use crate::shell::graphql::{self, AppSchema};
use crate::shell::state::AppState;

pub fn router(state: AppState, schema: AppSchema) -> Router {
    Router::new()
        .route("/attendance/check-in", post(check_in_http::handle))
        .route("/attendance/check-out", post(check_out_http::handle))
        .route("/attendance/today", get(get_today_status_http::handle))
        .route("/attendance/stats", get(get_stats_http::handle))
        .route("/attendance/records", get(list_records_http::handle))
        .route(
            "/attendance/reset-overtime",
            post(reset_overtime_http::handle),
        )
        .route("/me", get(get_caller_http::handle))
        .route("/health", get(health))
        .route("/graphql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApplicationError::Rejected(_) => StatusCode::CONFLICT,
            ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match &self {
            ApplicationError::Store(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        };
        (
            status,
            Json(json!({ "error": message, "code": self.code() })),
        )
            .into_response()
    }
}
