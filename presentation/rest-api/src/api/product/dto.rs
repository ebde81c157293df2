use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde_json::Value;

use business::domain::product::model::Product;

/// Body of create and update requests.
///
/// Fields are optional at the schema level so that a missing field reaches
/// validation and produces the catalog's own 400 envelope.
#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name (required, non-empty)
    pub name: Option<String>,
    /// Price (required, non-zero). A JSON number or a numeric string.
    pub price: Option<Value>,
    /// Image URL (required, non-empty)
    pub image: Option<String>,
}

impl ProductRequest {
    /// Reads `price` as a number. Form inputs submit numeric strings, so
    /// `"1.5"` is accepted alongside `1.5`; `null` and `""` count as absent.
    pub fn parsed_price(&self) -> Result<Option<f64>, String> {
        let price = match &self.price {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(_) => None,
        };

        match price {
            Some(value) if value.is_finite() => Ok(Some(value)),
            _ => Err(format!("price is not a number: {}", self.price_text())),
        }
    }

    fn price_text(&self) -> String {
        self.price
            .as_ref()
            .map(Value::to_string)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            price: product.price,
            image: product.image,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// `{success: true, message?, data: Product}`
#[derive(Debug, Clone, Object)]
pub struct ProductEnvelope {
    pub success: bool,
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
    pub data: ProductResponse,
}

impl ProductEnvelope {
    pub fn new(product: Product, message: Option<&str>) -> Self {
        Self {
            success: true,
            message: message.map(str::to_string),
            data: product.into(),
        }
    }
}

/// `{success: true, data: Product[]}`
#[derive(Debug, Clone, Object)]
pub struct ProductListEnvelope {
    pub success: bool,
    pub data: Vec<ProductResponse>,
}

impl From<Vec<Product>> for ProductListEnvelope {
    fn from(products: Vec<Product>) -> Self {
        Self {
            success: true,
            data: products.into_iter().map(|p| p.into()).collect(),
        }
    }
}
