// Composition root for the activities roster.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory activity store and seed it.
// - Wire the store into use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod telemetry;
