use async_trait::async_trait;
use tracing::{debug, instrument};

use super::{use_query, ClientProvider, Component, Console, EffectOnChange, QueryResult};
use crate::domain::ProductData;
use crate::graphql::Operation;

pub const PRODUCT_DETAIL_MARKUP: &str = "<div><h1>product detail</h1></div>";

/// Placeholder view over a single product, looked up by primary key.
pub struct ProductDetailView<C> {
    pk: i64,
    console: C,
    data_changed: EffectOnChange<ProductData>,
}

impl<C: Console<ProductData>> ProductDetailView<C> {
    pub fn new(pk: i64, console: C) -> Self {
        Self {
            pk,
            console,
            data_changed: EffectOnChange::default(),
        }
    }

    fn render(&mut self, result: &QueryResult<ProductData>) -> String {
        let console = &self.console;
        self.data_changed
            .commit(result.data.as_ref(), |data| console.log(data));
        PRODUCT_DETAIL_MARKUP.to_string()
    }
}

#[async_trait]
impl<C: Console<ProductData>> Component for ProductDetailView<C> {
    #[instrument(name = "product_detail_view", skip_all)]
    async fn mount(&mut self, ctx: &ClientProvider) -> String {
        debug!(pk = self.pk, "Mounting");
        if !self.data_changed.has_committed() {
            self.render(&QueryResult::loading());
        }

        let result = use_query::<ProductData>(ctx, Operation::product(self.pk)).await;
        self.render(&result)
    }
}
