use async_trait::async_trait;
use tracing::{debug, instrument};

use super::{use_query, ClientProvider, Component, Console, EffectOnChange, QueryResult};
use crate::domain::ProductsData;
use crate::graphql::Operation;

pub const PRODUCTS_MARKUP: &str = "<div><h1>product</h1></div>";

/// Placeholder view over the product list.
///
/// Fetches [`GET_PRODUCTS`](crate::graphql::GET_PRODUCTS) and writes the data
/// to its console whenever it changes. The `error` and `loading` signals are
/// not used; nothing from the data is rendered.
pub struct ProductsView<C> {
    console: C,
    data_changed: EffectOnChange<ProductsData>,
}

impl<C: Console<ProductsData>> ProductsView<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            data_changed: EffectOnChange::default(),
        }
    }

    fn render(&mut self, result: &QueryResult<ProductsData>) -> String {
        let console = &self.console;
        self.data_changed
            .commit(result.data.as_ref(), |data| console.log(data));
        PRODUCTS_MARKUP.to_string()
    }
}

#[async_trait]
impl<C: Console<ProductsData>> Component for ProductsView<C> {
    #[instrument(name = "products_view", skip_all)]
    async fn mount(&mut self, ctx: &ClientProvider) -> String {
        if !self.data_changed.has_committed() {
            debug!("Initial render");
            self.render(&QueryResult::loading());
        }

        let result = use_query::<ProductsData>(ctx, Operation::products()).await;
        self.render(&result)
    }
}
