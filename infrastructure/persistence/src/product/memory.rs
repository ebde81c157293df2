use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductFields};
use business::domain::product::repository::ProductRepository;

/// Process-local product store, kept in insertion order.
///
/// Used when `DATABASE_URL=memory` and by the HTTP tests. Contents are lost
/// when the process exits.
#[derive(Default)]
pub struct ProductRepositoryInMemory {
    products: RwLock<Vec<Product>>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        self.products.write().await.push(product.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, fields: &ProductFields) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        product.apply(fields.clone());
        Ok(product.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        Ok(products.remove(index))
    }
}
