//! # product-feed
//!
//! Queries a GraphQL endpoint for the product list and mounts a placeholder
//! view that logs the fetched data.
//!
//! The pieces, in dependency order:
//!
//! - **Query definition** - static documents and the operation sent over
//!   the wire → [`graphql`]
//! - **Link chain** - error-reporting stage in front of the HTTP transport
//!   → [`link::ErrorLink`], [`link::HttpLink`]
//! - **Client** - service owning the in-memory cache and the link chain,
//!   reached through a cloneable handle → [`client_actor::ClientService`],
//!   [`clients::GraphqlClient`]
//! - **Views** - components mounted under a provider, fetching through
//!   [`components::use_query`] → [`components::ProductsView`]
//! - **Application root** - wiring, startup and shutdown → [`app_system::App`]
//!
//! ## Usage
//!
//! ```bash
//! cargo run                   # list products
//! cargo run -- 3              # single product with pk 3
//! RUST_LOG=debug cargo run
//! PRODUCT_FEED_GRAPHQL_URI=http://localhost:8000/graphql cargo run
//! ```

mod app_system;
mod cache;
mod client_actor;
mod clients;
mod components;
mod domain;
mod graphql;
mod link;
mod messages;

#[cfg(test)]
mod mock_framework;

use tracing::{info, Instrument};
use crate::app_system::{setup_tracing, App, ClientConfig};
use crate::components::{ProductDetailView, ProductsView, TracingConsole};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ClientConfig::from_env().map_err(|e| format!("Invalid configuration: {}", e))?;
    info!(uri = %config.uri, "Starting product feed");

    let pk = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<i64>())
        .transpose()
        .map_err(|e| format!("Invalid product pk: {}", e))?;

    let app = App::new(&config).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("render");
    let markup = async {
        match pk {
            Some(pk) => app.mount(&mut ProductDetailView::new(pk, TracingConsole)).await,
            None => app.mount(&mut ProductsView::new(TracingConsole)).await,
        }
    }
    .instrument(span)
    .await;

    info!(%markup, "View rendered");

    app.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
