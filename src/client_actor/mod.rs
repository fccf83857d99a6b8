//! The GraphQL client service: owns the cache and the link chain.

mod error;
mod outcome;
mod service;

pub use error::*;
pub use outcome::*;
pub use service::*;
