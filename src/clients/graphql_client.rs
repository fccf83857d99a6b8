use serde::de::DeserializeOwned;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::client_actor::{ClientError, QueryOutcome};
use crate::graphql::Operation;
use crate::messages::ClientRequest;

/// Cloneable handle to a running [`ClientService`](crate::client_actor::ClientService).
#[derive(Clone)]
pub struct GraphqlClient {
    sender: mpsc::Sender<ClientRequest>,
}

impl GraphqlClient {
    pub(crate) fn new(sender: mpsc::Sender<ClientRequest>) -> Self {
        Self { sender }
    }

    /// Runs `operation` and decodes its data into `T`.
    pub async fn query_as<T: DeserializeOwned>(
        &self,
        operation: Operation,
    ) -> Result<QueryOutcome<T>, ClientError> {
        self.query(operation).await?.decode()
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), ClientError> {
        debug!("Sending shutdown");
        self.sender
            .send(ClientRequest::Shutdown)
            .await
            .map_err(|_| ClientError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(GraphqlClient => fn query(operation: Operation) -> QueryOutcome as ClientRequest::Query, Error = ClientError);
client_method!(GraphqlClient => fn reset_store() -> () as ClientRequest::ResetStore, Error = ClientError);

#[cfg(test)]
client_method!(GraphqlClient => fn cache_size() -> usize as ClientRequest::CacheSize, Error = ClientError);
