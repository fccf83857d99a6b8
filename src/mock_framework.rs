//! # Mock Framework
//!
//! Test doubles for every seam of the pipeline.
//!
//! - [`ScriptedLink`] terminates a link chain with queued responses and
//!   records the operations it receives.
//! - [`RecordingAlert`] and [`RecordingConsole`] capture what the error link
//!   and the views emit.
//! - [`create_mock_client`] hands out a [`GraphqlClient`] whose requests land
//!   on a receiver the test controls; [`expect_query`] pulls the next query
//!   off it so the test can answer deterministically.
//! - [`capture_logs`] collects the formatted `tracing` output of a closure.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

use crate::client_actor::{ClientError, QueryOutcome};
use crate::clients::GraphqlClient;
use crate::components::Console;
use crate::graphql::{GraphqlResponse, Operation};
use crate::link::{Alert, Forward, Link, LinkError};
use crate::messages::ClientRequest;

#[derive(Clone, Default)]
pub struct ScriptedLink {
    replies: Arc<Mutex<VecDeque<Result<GraphqlResponse, LinkError>>>>,
    operations: Arc<Mutex<Vec<Operation>>>,
}

impl ScriptedLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: GraphqlResponse) {
        self.replies.lock().unwrap().push_back(Ok(response));
    }

    pub fn push_error(&self, error: LinkError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.operations.lock().unwrap().clone()
    }
}

#[async_trait]
impl Link for ScriptedLink {
    async fn request(
        &self,
        operation: Operation,
        _forward: Forward<'_>,
    ) -> Result<GraphqlResponse, LinkError> {
        self.operations.lock().unwrap().push(operation);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LinkError::Transport("no scripted reply".to_string())))
    }
}

#[derive(Clone, Default)]
pub struct RecordingAlert {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingAlert {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Alert for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub struct RecordingConsole<T> {
    entries: Arc<Mutex<Vec<Option<T>>>>,
}

impl<T> Clone for RecordingConsole<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T> Default for RecordingConsole<T> {
    fn default() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone> RecordingConsole<T> {
    pub fn entries(&self) -> Vec<Option<T>> {
        self.entries.lock().unwrap().clone()
    }
}

impl<T: Clone + Send> Console<T> for RecordingConsole<T> {
    fn log(&self, data: Option<&T>) {
        self.entries.lock().unwrap().push(data.cloned());
    }
}

/// Creates a client whose requests arrive on the returned receiver instead of
/// a running service.
pub fn create_mock_client(buffer_size: usize) -> (GraphqlClient, mpsc::Receiver<ClientRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (GraphqlClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Query request
pub async fn expect_query(
    receiver: &mut mpsc::Receiver<ClientRequest>,
) -> Option<(Operation, oneshot::Sender<Result<QueryOutcome, ClientError>>)> {
    match receiver.recv().await {
        Some(ClientRequest::Query { operation, respond_to }) => Some((operation, respond_to)),
        _ => None,
    }
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a plain-text subscriber and returns everything it logged.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let query_task = tokio::spawn(async move { client.query(Operation::products()).await });

        let (operation, responder) = expect_query(&mut receiver).await.expect("Expected Query request");
        assert_eq!(operation, Operation::products());
        responder.send(Ok(QueryOutcome::data(serde_json::json!({})))).unwrap();

        let result = query_task.await.unwrap();
        assert_eq!(result, Ok(QueryOutcome::data(serde_json::json!({}))));
    }

    #[tokio::test]
    async fn test_scripted_link_runs_dry() {
        let link = ScriptedLink::new();
        let chain = crate::link::from(vec![Arc::new(link.clone())]);

        let result = chain.execute(Operation::products()).await;
        assert!(matches!(result, Err(LinkError::Transport(_))));
        assert_eq!(link.operations().len(), 1);
    }
}
