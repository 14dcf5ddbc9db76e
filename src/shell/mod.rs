// Composition root for the attendance service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the concrete store, authenticator and clock.
// - Wire them into the use case handlers and expose them over HTTP and GraphQL.

pub mod auth;
pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
