use serde::Serialize;
use serde_json::Value;

/// Product list, as a relay connection.
pub const GET_PRODUCTS: &str = r#"
query {
  products {
    edges {
      node {
        name
        description
        price
        quantity
      }
    }
  }
}
"#;

/// Single product by primary key.
pub const GET_PRODUCT: &str = r#"
query GetProduct($pk: Int) {
  product(pk: $pk) {
    name
    description
    price
    quantity
  }
}
"#;

/// A request travelling through the link chain.
///
/// Serialises to the GraphQL-over-HTTP body:
/// `{"query": ..., "variables": ..., "operationName": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl Operation {
    pub fn new(query: &'static str) -> Self {
        Self {
            query,
            variables: None,
            operation_name: None,
        }
    }

    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = Some(variables);
        self
    }

    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// The product list operation.
    pub fn products() -> Self {
        Self::new(GET_PRODUCTS)
    }

    /// The single product operation for `pk`.
    pub fn product(pk: i64) -> Self {
        Self::new(GET_PRODUCT)
            .with_variables(serde_json::json!({ "pk": pk }))
            .with_operation_name("GetProduct")
    }

    /// Key under which the result of this operation is cached.
    ///
    /// Equal query text and variables always yield the same key.
    pub fn cache_key(&self) -> String {
        match &self.variables {
            Some(variables) => format!("{}|{}", self.query.trim(), variables),
            None => self.query.trim().to_string(),
        }
    }
}
