//! View components and the plumbing they mount under.

mod console;
mod hooks;
mod product_detail;
mod products;
mod provider;

pub use console::*;
pub use hooks::*;
pub use product_detail::*;
pub use products::*;
pub use provider::*;

use async_trait::async_trait;

/// A view mounted under a [`ClientProvider`].
#[async_trait]
pub trait Component: Send {
    /// Drives the component through its render cycles and returns the final
    /// markup.
    async fn mount(&mut self, ctx: &ClientProvider) -> String;
}
