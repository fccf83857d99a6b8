use tokio::sync::oneshot;
use crate::client_actor::{ClientError, QueryOutcome};
use crate::graphql::Operation;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Messages accepted by [`ClientService`](crate::client_actor::ClientService).
/// Each variant carries its parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum ClientRequest {
    Query {
        operation: Operation,
        respond_to: ServiceResponse<QueryOutcome, ClientError>,
    },
    ResetStore {
        respond_to: ServiceResponse<(), ClientError>,
    },
    Shutdown,
    #[cfg(test)]
    CacheSize {
        respond_to: ServiceResponse<usize, ClientError>,
    },
}
