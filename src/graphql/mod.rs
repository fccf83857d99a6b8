//! GraphQL documents, the operation sent through the link chain, and the
//! response envelope coming back.

mod query;
mod response;

pub use query::*;
pub use response::*;
