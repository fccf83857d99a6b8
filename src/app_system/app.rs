use std::sync::Arc;
use tracing::{error, info, instrument};

use super::ClientConfig;
use crate::cache::InMemoryCache;
use crate::client_actor::{ClientError, ClientService};
use crate::components::{ClientProvider, Component};
use crate::link::{self, ErrorLink, HttpLink, LinkChain};

/// Application root: owns the client service and the provider every
/// component is mounted under.
pub struct App {
    provider: ClientProvider,
    handle: tokio::task::JoinHandle<()>,
}

impl App {
    /// Wires `InMemoryCache` and `[ErrorLink, HttpLink]` for `config`.
    #[instrument(name = "app", skip_all, fields(uri = %config.uri))]
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = HttpLink::new(config.uri.clone(), config.timeout)?;
        let chain = link::from(vec![Arc::new(ErrorLink::alerting()), Arc::new(http)]);
        info!("Client configured");
        Ok(Self::with_link(config.buffer_size, chain))
    }

    /// Starts the client service over an arbitrary link chain.
    pub fn with_link(buffer_size: usize, link: LinkChain) -> Self {
        let (service, client) = ClientService::new(buffer_size, InMemoryCache::new(), link);
        let handle = tokio::spawn(service.run());
        Self {
            provider: ClientProvider::new(client),
            handle,
        }
    }

    pub async fn mount<C: Component + ?Sized>(&self, component: &mut C) -> String {
        self.provider.mount(component).await
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down...");
        self.provider
            .client()
            .shutdown()
            .await
            .map_err(|e| e.to_string())?;

        if let Err(e) = self.handle.await {
            error!("Client service task failed: {:?}", e);
            return Err(format!("Client service task failed: {:?}", e));
        }

        info!("Shutdown complete.");
        Ok(())
    }
}
