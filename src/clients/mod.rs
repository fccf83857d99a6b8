#[macro_use]
mod macros;
mod graphql_client;

pub use graphql_client::*;
