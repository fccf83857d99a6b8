use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::{Forward, Link, LinkError};
use crate::graphql::{GraphqlResponse, Operation};

/// Terminating link that POSTs operations to a GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct HttpLink {
    uri: String,
    client: reqwest::Client,
}

impl HttpLink {
    pub fn new(uri: impl Into<String>, timeout: Duration) -> Result<Self, LinkError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LinkError::Transport(e.to_string()))?;
        Ok(Self {
            uri: uri.into(),
            client,
        })
    }
}

#[async_trait]
impl Link for HttpLink {
    #[instrument(name = "http_link", skip_all, fields(uri = %self.uri))]
    async fn request(
        &self,
        operation: Operation,
        _forward: Forward<'_>,
    ) -> Result<GraphqlResponse, LinkError> {
        debug!("Posting operation");
        let response = self
            .client
            .post(&self.uri)
            .json(&operation)
            .send()
            .await
            .map_err(|e| LinkError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| LinkError::Transport(e.to_string()))?;

        // Servers commonly answer validation failures with a 4xx whose body
        // is still a well-formed GraphQL response.
        match serde_json::from_slice::<GraphqlResponse>(&body) {
            Ok(parsed) if status.is_success() || parsed.has_errors() => {
                debug!(status = status.as_u16(), errors = parsed.errors.len(), "Response received");
                Ok(parsed)
            }
            Err(e) if status.is_success() => Err(LinkError::Decode(e.to_string())),
            _ => {
                warn!(status = status.as_u16(), "Unexpected HTTP status");
                Err(LinkError::Status {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&body).into_owned(),
                })
            }
        }
    }
}
