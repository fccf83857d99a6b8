use super::Component;
use crate::clients::GraphqlClient;

/// Supplies a [`GraphqlClient`] to every component mounted beneath it.
#[derive(Clone)]
pub struct ClientProvider {
    client: GraphqlClient,
}

impl ClientProvider {
    pub fn new(client: GraphqlClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &GraphqlClient {
        &self.client
    }

    pub async fn mount<C: Component + ?Sized>(&self, component: &mut C) -> String {
        component.mount(self).await
    }
}
