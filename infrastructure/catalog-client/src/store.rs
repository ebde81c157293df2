use std::sync::Arc;

use uuid::Uuid;

use business::domain::logger::Logger;
use business::domain::product::model::{NewProductProps, ProductFields};

use crate::dto::{ProductPayload, ProductRecord};
use crate::gateway::CatalogGateway;

/// Result handed back to the UI after each store action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub success: bool,
    pub message: String,
}

impl ActionOutcome {
    fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Client-side mirror of the server's product collection.
///
/// Each action performs one request and only touches the local list when
/// the server reports success. Owned by its caller; share it by passing
/// `&mut ProductStore` down to whatever renders it.
pub struct ProductStore {
    gateway: Arc<dyn CatalogGateway>,
    logger: Arc<dyn Logger>,
    products: Vec<ProductRecord>,
}

impl ProductStore {
    pub fn new(gateway: Arc<dyn CatalogGateway>, logger: Arc<dyn Logger>) -> Self {
        Self {
            gateway,
            logger,
            products: Vec::new(),
        }
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn set_products(&mut self, products: Vec<ProductRecord>) {
        self.products = products;
    }

    /// Replaces the local list with the server's.
    ///
    /// Failures are logged and the local list is left as it was.
    pub async fn fetch_all(&mut self) -> ActionOutcome {
        let message = match self.gateway.list().await {
            Ok(envelope) if envelope.success => {
                self.products = envelope.data.unwrap_or_default();
                return ActionOutcome::ok("Products fetched successfully");
            }
            Ok(envelope) => envelope.failure_message(),
            Err(e) => e.to_string(),
        };
        self.logger
            .error(&format!("Error fetching products: {}", message));
        ActionOutcome::failed(message)
    }

    pub async fn create(&mut self, candidate: NewProductProps) -> ActionOutcome {
        let fields = match ProductFields::validate(candidate) {
            Ok(fields) => fields,
            Err(_) => return ActionOutcome::failed("All fields are required"),
        };

        let message = match self.gateway.create(&ProductPayload::from(fields)).await {
            Ok(envelope) if envelope.success => match envelope.data {
                Some(product) => {
                    self.products.push(product);
                    return ActionOutcome::ok("Product added successfully");
                }
                None => "Response did not include the created product".to_string(),
            },
            Ok(envelope) => envelope.failure_message(),
            Err(e) => e.to_string(),
        };
        self.logger
            .error(&format!("Error adding product: {}", message));
        ActionOutcome::failed(message)
    }

    /// Sends a full replacement of `product`.
    ///
    /// On success the local entry becomes `product` itself, not the copy the
    /// server echoed back.
    pub async fn update(&mut self, product: ProductRecord) -> ActionOutcome {
        let payload = ProductPayload::from(&product);
        let message = match self.gateway.update(product.id, &payload).await {
            Ok(envelope) if envelope.success => {
                if let Some(entry) = self.products.iter_mut().find(|p| p.id == product.id) {
                    *entry = product;
                }
                return ActionOutcome::ok("Product updated successfully");
            }
            Ok(envelope) => envelope.failure_message(),
            Err(e) => e.to_string(),
        };
        self.logger
            .error(&format!("Error updating product: {}", message));
        ActionOutcome::failed(message)
    }

    pub async fn delete(&mut self, id: Uuid) -> ActionOutcome {
        let message = match self.gateway.delete(id).await {
            Ok(envelope) if envelope.success => {
                self.products.retain(|p| p.id != id);
                return ActionOutcome::ok("Product deleted successfully");
            }
            Ok(envelope) => envelope.failure_message(),
            Err(e) => e.to_string(),
        };
        self.logger
            .error(&format!("Error deleting product: {}", message));
        ActionOutcome::failed(message)
    }
}
