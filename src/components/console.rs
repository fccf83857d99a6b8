use serde::Serialize;
use tracing::{info, warn};

/// Diagnostic sink a component writes query data to.
pub trait Console<T>: Send + Sync {
    fn log(&self, data: Option<&T>);
}

/// Logs data as JSON through `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl<T: Serialize> Console<T> for TracingConsole {
    fn log(&self, data: Option<&T>) {
        let Some(data) = data else {
            info!("Query data: undefined");
            return;
        };

        match serde_json::to_string(data) {
            Ok(json) => info!(data = %json, "Query data"),
            Err(e) => warn!(error = %e, "Query data could not be rendered as JSON"),
        }
    }
}
