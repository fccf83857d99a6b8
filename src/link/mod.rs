//! The request pipeline.
//!
//! A [`LinkChain`] is an ordered list of [`Link`] stages. Each stage either
//! hands the operation on through its [`Forward`] or terminates the chain by
//! performing the request itself.

mod error;
mod error_link;
mod http_link;

pub use error::*;
pub use error_link::*;
pub use http_link::*;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::graphql::{GraphqlResponse, Operation};

/// One stage of the request pipeline.
#[async_trait]
pub trait Link: Send + Sync {
    async fn request(
        &self,
        operation: Operation,
        forward: Forward<'_>,
    ) -> Result<GraphqlResponse, LinkError>;
}

/// The remaining stages after the current one.
#[derive(Clone, Copy)]
pub struct Forward<'a> {
    rest: &'a [Arc<dyn Link>],
}

impl<'a> Forward<'a> {
    /// Hands the operation to the next stage.
    pub async fn run(self, operation: Operation) -> Result<GraphqlResponse, LinkError> {
        match self.rest.split_first() {
            Some((next, rest)) => next.request(operation, Forward { rest }).await,
            None => Err(LinkError::Terminated),
        }
    }
}

/// Links composed in order. The last one must terminate.
#[derive(Clone, Default)]
pub struct LinkChain {
    links: Vec<Arc<dyn Link>>,
}

impl LinkChain {
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub async fn execute(&self, operation: Operation) -> Result<GraphqlResponse, LinkError> {
        debug!(stages = self.links.len(), "Executing link chain");
        Forward { rest: &self.links }.run(operation).await
    }
}

/// Composes `links` into a chain, first element outermost.
pub fn from(links: Vec<Arc<dyn Link>>) -> LinkChain {
    LinkChain { links }
}
