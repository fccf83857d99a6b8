use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use super::{ClientError, QueryOutcome};
use crate::cache::InMemoryCache;
use crate::clients::GraphqlClient;
use crate::graphql::Operation;
use crate::link::LinkChain;
use crate::messages::{ClientRequest, ServiceResponse};

/// Actor owning the result cache and the link chain.
///
/// Requests are handled one at a time in arrival order. Queries are
/// cache-first: a hit never reaches the link chain, a successful response
/// without errors is written back.
pub struct ClientService {
    receiver: mpsc::Receiver<ClientRequest>,
    cache: InMemoryCache,
    link: LinkChain,
}

impl ClientService {
    pub fn new(buffer_size: usize, cache: InMemoryCache, link: LinkChain) -> (Self, GraphqlClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            cache,
            link,
        };
        let client = GraphqlClient::new(sender);
        (service, client)
    }

    #[instrument(name = "client_service", skip(self))]
    pub async fn run(mut self) {
        info!(stages = self.link.len(), "ClientService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ClientRequest::Query { operation, respond_to } => {
                    self.handle_query(operation, respond_to).await;
                }
                ClientRequest::ResetStore { respond_to } => {
                    self.handle_reset_store(respond_to);
                }
                ClientRequest::Shutdown => {
                    info!("ClientService shutting down");
                    break;
                }
                #[cfg(test)]
                ClientRequest::CacheSize { respond_to } => {
                    let _ = respond_to.send(Ok(self.cache.len()));
                }
            }
        }

        info!("ClientService stopped");
    }

    #[instrument(
        fields(operation_name = ?operation.operation_name),
        skip(self, operation, respond_to)
    )]
    async fn handle_query(
        &mut self,
        operation: Operation,
        respond_to: ServiceResponse<QueryOutcome, ClientError>,
    ) {
        let key = operation.cache_key();

        if let Some(data) = self.cache.read(&key) {
            debug!("Cache hit");
            let _ = respond_to.send(Ok(QueryOutcome::data(data.clone())));
            return;
        }

        debug!("Cache miss, executing link chain");
        let result = match self.link.execute(operation).await {
            Ok(response) if response.has_errors() => {
                warn!(count = response.errors.len(), "Query returned GraphQL errors");
                Ok(QueryOutcome::errors(response.errors))
            }
            Ok(response) => {
                if let Some(data) = &response.data {
                    self.cache.write(key, data.clone());
                }
                Ok(QueryOutcome {
                    data: response.data,
                    errors: Vec::new(),
                })
            }
            Err(e) => {
                warn!(error = %e, "Query failed");
                Err(ClientError::from(e))
            }
        };

        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_reset_store(&mut self, respond_to: ServiceResponse<(), ClientError>) {
        let evicted = self.cache.len();
        self.cache.reset();
        info!(evicted, "Store reset");
        let _ = respond_to.send(Ok(()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::{GraphqlError, GraphqlResponse};
    use crate::link::{self, LinkError};
    use crate::mock_framework::ScriptedLink;
    use serde_json::json;
    use std::sync::Arc;

    fn start(terminal: &ScriptedLink) -> GraphqlClient {
        let chain = link::from(vec![Arc::new(terminal.clone())]);
        let (service, client) = ClientService::new(8, InMemoryCache::new(), chain);
        tokio::spawn(service.run());
        client
    }

    #[tokio::test]
    async fn test_cache_hit_skips_link_chain() -> Result<(), Box<dyn std::error::Error>> {
        let terminal = ScriptedLink::new();
        terminal.push_response(GraphqlResponse::data(json!({ "products": { "edges": [] } })));
        let client = start(&terminal);

        let first = client.query(Operation::products()).await?;
        let second = client.query(Operation::products()).await?;

        assert_eq!(first, second);
        assert_eq!(terminal.operations().len(), 1);
        assert_eq!(client.cache_size().await?, 1);

        client.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_errors_withhold_data_and_skip_cache() -> Result<(), Box<dyn std::error::Error>> {
        let terminal = ScriptedLink::new();
        terminal.push_response(GraphqlResponse {
            data: Some(json!({ "products": null })),
            errors: vec![GraphqlError::new("denied")],
        });
        let client = start(&terminal);

        let outcome = client.query(Operation::products()).await?;
        assert_eq!(outcome, QueryOutcome::errors(vec![GraphqlError::new("denied")]));
        assert_eq!(client.cache_size().await?, 0);

        client.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_link_failure_maps_to_client_error() {
        let terminal = ScriptedLink::new();
        terminal.push_error(LinkError::Transport("refused".into()));
        let client = start(&terminal);

        let result = client.query(Operation::products()).await;
        assert_eq!(result, Err(ClientError::Link(LinkError::Transport("refused".into()))));
    }

    #[tokio::test]
    async fn test_reset_store_forces_refetch() -> Result<(), Box<dyn std::error::Error>> {
        let terminal = ScriptedLink::new();
        terminal.push_response(GraphqlResponse::data(json!({ "product": null })));
        terminal.push_response(GraphqlResponse::data(json!({ "product": { "name": "Lamp" } })));
        let client = start(&terminal);

        client.query(Operation::product(1)).await?;
        client.reset_store().await?;
        let refreshed = client.query(Operation::product(1)).await?;

        assert_eq!(refreshed.data, Some(json!({ "product": { "name": "Lamp" } })));
        assert_eq!(terminal.operations().len(), 2);
        Ok(())
    }
}
