use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductFields};

/// Port over the document store holding products.
///
/// `update` and `delete` are single store calls that return the affected
/// product, or [`RepositoryError::NotFound`] when no product has that id.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn update(&self, id: Uuid, fields: &ProductFields) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<Product, RepositoryError>;
}
