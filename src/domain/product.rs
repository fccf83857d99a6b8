use serde::{Deserialize, Serialize};

/// A product record as served by the catalogue endpoint.
///
/// Every column behind these fields is nullable on the server, so each one
/// may be absent from a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl Product {
    #[allow(dead_code)]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            price: Some(price),
            quantity: Some(quantity),
        }
    }
}

/// One edge of the relay-style product connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductEdge {
    pub node: Option<Product>,
}

/// Relay connection wrapping the product list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductConnection {
    #[serde(default)]
    pub edges: Vec<ProductEdge>,
}

impl ProductConnection {
    /// Products in edge order, skipping null nodes.
    #[allow(dead_code)]
    pub fn nodes(&self) -> impl Iterator<Item = &Product> {
        self.edges.iter().filter_map(|edge| edge.node.as_ref())
    }
}

impl FromIterator<Product> for ProductConnection {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            edges: iter
                .into_iter()
                .map(|node| ProductEdge { node: Some(node) })
                .collect(),
        }
    }
}

/// `data` payload of the product list query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductsData {
    pub products: Option<ProductConnection>,
}

/// `data` payload of the single product query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductData {
    pub product: Option<Product>,
}
