use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ClientError;
use crate::graphql::GraphqlError;

/// What a query produced once it came back through the pipeline.
///
/// When `errors` is non-empty the server reported faults and `data` is
/// withheld.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome<T = Value> {
    pub data: Option<T>,
    pub errors: Vec<GraphqlError>,
}

impl<T> QueryOutcome<T> {
    pub fn data(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn errors(errors: Vec<GraphqlError>) -> Self {
        Self { data: None, errors }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl QueryOutcome<Value> {
    /// Decodes `data` into a typed shape.
    pub fn decode<T: DeserializeOwned>(self) -> Result<QueryOutcome<T>, ClientError> {
        let data = self
            .data
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(QueryOutcome {
            data,
            errors: self.errors,
        })
    }
}
