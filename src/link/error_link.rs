use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::{Forward, Link, LinkError};
use crate::graphql::{GraphqlError, GraphqlResponse, Operation};

/// A blocking, user-facing notice.
pub trait Alert: Send + Sync {
    fn alert(&self, message: &str);
}

/// Writes alerts to stderr and the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrAlert;

impl Alert for StderrAlert {
    fn alert(&self, message: &str) {
        warn!(alert = %message, "Alert raised");
        eprintln!("{message}");
    }
}

/// Called by [`ErrorLink`] for each application-level error in a response.
pub trait ErrorHandler: Send + Sync {
    fn on_graphql_error(&self, error: &GraphqlError);
}

impl<F> ErrorHandler for F
where
    F: Fn(&GraphqlError) + Send + Sync,
{
    fn on_graphql_error(&self, error: &GraphqlError) {
        self(error)
    }
}

/// Raises `graphql error {message}` through an [`Alert`].
pub struct AlertOnError<A> {
    alert: A,
}

impl<A: Alert> AlertOnError<A> {
    pub fn new(alert: A) -> Self {
        Self { alert }
    }
}

impl<A: Alert> ErrorHandler for AlertOnError<A> {
    fn on_graphql_error(&self, error: &GraphqlError) {
        self.alert.alert(&format!("graphql error {}", error.message));
    }
}

/// Inspects responses coming back up the chain and reports GraphQL errors.
///
/// Transport failures are passed through as-is. The response is never
/// modified.
#[derive(Clone)]
pub struct ErrorLink {
    handler: Arc<dyn ErrorHandler>,
}

impl ErrorLink {
    pub fn new(handler: impl ErrorHandler + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// The default handler: one stderr alert per error message.
    pub fn alerting() -> Self {
        Self::new(AlertOnError::new(StderrAlert))
    }
}

#[async_trait]
impl Link for ErrorLink {
    #[instrument(name = "error_link", skip_all)]
    async fn request(
        &self,
        operation: Operation,
        forward: Forward<'_>,
    ) -> Result<GraphqlResponse, LinkError> {
        let result = forward.run(operation).await;

        match &result {
            Ok(response) if response.has_errors() => {
                debug!(count = response.errors.len(), "Reporting GraphQL errors");
                for error in &response.errors {
                    self.handler.on_graphql_error(error);
                }
            }
            Ok(_) => {}
            Err(e) => debug!(error = %e, "Transport error passed through"),
        }

        result
    }
}
