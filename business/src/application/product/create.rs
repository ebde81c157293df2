use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Creating product: {}",
            params.name.as_deref().unwrap_or("<missing>")
        ));

        let product = Product::new(NewProductProps {
            name: params.name,
            price: params.price,
            image: params.image,
        })?;

        self.repository.save(&product).await.map_err(|e| {
            self.logger.error(&format!("Error saving product: {}", e));
            e
        })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::ProductFields;
    use mockall::mock;
    use proptest::prelude::*;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn update(&self, id: Uuid, fields: &ProductFields) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(name: Option<&str>, price: Option<f64>, image: Option<&str>) -> CreateProductParams {
        CreateProductParams {
            name: name.map(str::to_string),
            price,
            image: image.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn should_create_product_when_all_fields_present() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .withf(|product| product.name == "Pen" && product.price == 1.5)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(params(Some("Pen"), Some(1.5), Some("http://x/p.png")))
            .await
            .unwrap();

        assert_eq!(product.name, "Pen");
        assert_eq!(product.price, 1.5);
        assert_eq!(product.image, "http://x/p.png");
    }

    #[tokio::test]
    async fn should_not_persist_when_a_field_is_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Some("Pen"), None, Some("http://x/p.png")))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::MissingFields));
    }

    #[tokio::test]
    async fn should_surface_store_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::database_error("disk full")));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Some("Pen"), Some(1.5), Some("http://x/p.png")))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError(_))
        ));
    }

    proptest! {
        #[test]
        fn created_product_echoes_its_input(
            name in "[A-Za-z][A-Za-z0-9 ]{0,24}",
            price in 0.01f64..100_000.0,
            image in "https?://[a-z]{1,12}/[a-z0-9]{1,12}\\.png",
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let mut mock_repo = MockProductRepo::new();
            mock_repo.expect_save().returning(|_| Ok(()));
            let use_case = CreateProductUseCaseImpl {
                repository: Arc::new(mock_repo),
                logger: mock_logger(),
            };

            let product = runtime
                .block_on(use_case.execute(params(Some(&name), Some(price), Some(&image))))
                .unwrap();

            prop_assert_eq!(product.name, name);
            prop_assert_eq!(product.price, price);
            prop_assert_eq!(product.image, image);
        }
    }
}
