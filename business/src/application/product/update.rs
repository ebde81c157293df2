use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product, ProductFields};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

/// Full replacement: a missing field is rejected with `MissingFields` (400) before any store call.
pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let fields = ProductFields::validate(NewProductProps {
            name: params.name,
            price: params.price,
            image: params.image,
        })?;

        let product = self
            .repository
            .update(params.id, &fields)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => {
                    self.logger
                        .error(&format!("Error updating product: {}", other));
                    ProductError::Repository(other)
                }
            })?;

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
