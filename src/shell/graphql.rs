use async_graphql::{EmptySubscription, ErrorExtensions, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::attendance::use_cases::check_in::inbound::graphql::CheckInMutation;
use crate::modules::attendance::use_cases::check_out::inbound::graphql::CheckOutMutation;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::attendance::use_cases::get_caller::inbound::graphql::CallerQuery;
use crate::modules::attendance::use_cases::get_stats::inbound::graphql::StatsQuery;
use crate::modules::attendance::use_cases::get_today_status::inbound::graphql::TodayStatusQuery;
use crate::modules::attendance::use_cases::list_attendance_records::inbound::graphql::AttendanceRecordsQuery;
use crate::modules::attendance::use_cases::reset_overtime::inbound::graphql::ResetOvertimeMutation;
use crate::shared::core::primitives::UserId;
use crate::shell::auth::Caller;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    TodayStatusQuery,
    StatsQuery,
    AttendanceRecordsQuery,
    CallerQuery,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(CheckInMutation, CheckOutMutation, ResetOvertimeMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

/// The caller is resolved per request and handed to the resolvers as request data.
pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    caller: Caller,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema
        .execute(request.into_inner().data(caller))
        .await
        .into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub fn to_gql_error(error: ApplicationError) -> async_graphql::Error {
    let code = error.code();
    let message = match &error {
        ApplicationError::Store(_) => "Internal Server Error".to_string(),
        other => other.to_string(),
    };
    async_graphql::Error::new(message).extend_with(|_, extensions| extensions.set("code", code))
}

pub fn caller_from(context: &async_graphql::Context<'_>) -> Option<UserId> {
    context
        .data_opt::<Caller>()
        .and_then(|caller| caller.user_id().cloned())
}
