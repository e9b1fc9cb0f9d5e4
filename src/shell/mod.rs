// Composition root for the hydration ledger.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate concrete collaborators and wire them into use case handlers.
// - Expose the handlers over HTTP and GraphQL.

pub mod auth;
pub mod config;
pub mod errors;
pub mod graphql;
pub mod http;
pub mod state;
