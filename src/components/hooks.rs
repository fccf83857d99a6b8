use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use super::ClientProvider;
use crate::client_actor::ClientError;
use crate::graphql::{GraphqlError, Operation};

/// Why a query produced no data.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueryError {
    #[error("GraphQL errors: {}", join_messages(.0))]
    Graphql(Vec<GraphqlError>),
    #[error(transparent)]
    Client(#[from] ClientError),
}

fn join_messages(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// The three signals a query exposes to a component.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<T> {
    pub loading: bool,
    pub error: Option<QueryError>,
    pub data: Option<T>,
}

impl<T> QueryResult<T> {
    /// State before the first response arrives.
    pub fn loading() -> Self {
        Self {
            loading: true,
            error: None,
            data: None,
        }
    }
}

/// Runs `operation` with the provider's client and folds the outcome into
/// a [`QueryResult`].
#[instrument(skip(ctx))]
pub async fn use_query<T: DeserializeOwned>(ctx: &ClientProvider, operation: Operation) -> QueryResult<T> {
    let (data, error) = match ctx.client().query_as::<T>(operation).await {
        Ok(outcome) if outcome.has_errors() => (None, Some(QueryError::Graphql(outcome.errors))),
        Ok(outcome) => (outcome.data, None),
        Err(e) => (None, Some(QueryError::from(e))),
    };
    debug!(has_data = data.is_some(), has_error = error.is_some(), "Query settled");

    QueryResult {
        loading: false,
        error,
        data,
    }
}

/// Runs a callback when the watched value differs from the one seen on the
/// previous commit. The first commit always fires.
#[derive(Debug, Clone)]
pub struct EffectOnChange<T> {
    last: Option<Option<T>>,
}

impl<T> Default for EffectOnChange<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: Clone + PartialEq> EffectOnChange<T> {
    pub fn has_committed(&self) -> bool {
        self.last.is_some()
    }

    /// Returns whether `effect` ran.
    pub fn commit(&mut self, value: Option<&T>, effect: impl FnOnce(Option<&T>)) -> bool {
        if self.last.as_ref().map(Option::as_ref) == Some(value) {
            return false;
        }
        effect(value);
        self.last = Some(value.cloned());
        true
    }
}
