use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");
        let products = self.repository.get_all().await.map_err(|e| {
            self.logger.error(&format!("Error fetching products: {}", e));
            e
        })?;

        if products.is_empty() {
            self.logger.info("No products found");
            return Err(ProductError::CatalogEmpty);
        }

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
