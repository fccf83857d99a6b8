//! System orchestration, configuration, startup, and shutdown logic.

pub mod app;
pub mod config;
pub mod telemetry;

pub use app::*;
pub use config::*;
pub use telemetry::*;
