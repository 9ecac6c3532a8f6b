use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::expiry;
use crate::domain::product::model::{NewProductProps, Product, ProductFields};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let fields = ProductFields::new(NewProductProps {
            name: params.name,
            price: params.price,
            quantity: params.quantity,
            brand: params.brand,
            category: params.category,
            volume: params.volume,
            expiry: params.expiry.as_ref().and_then(expiry::parse),
        })?;

        self.repository
            .update(&params.id, &fields)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger.info(&format!("Product updated: {}", params.id));
        Ok(Product::from_repository(params.id, fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::expiry::ExpiryInput;
    use crate::domain::product::model::ProductId;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn add(&self, fields: &ProductFields) -> Result<Product, RepositoryError>;
            async fn update(&self, id: &ProductId, fields: &ProductFields) -> Result<(), RepositoryError>;
            async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
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

    fn params() -> UpdateProductParams {
        UpdateProductParams {
            id: ProductId::new("doc-1"),
            name: "Botox 100 UI".to_string(),
            price: 899.0,
            quantity: 6,
            brand: "Allergan".to_string(),
            category: None,
            volume: None,
            expiry: Some(ExpiryInput::Serial(48000.0)),
        }
    }

    #[tokio::test]
    async fn should_update_preserving_identity() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_update().returning(|_, _| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case.execute(params()).await.unwrap();
        assert_eq!(product.id, ProductId::new("doc-1"));
        assert_eq!(product.name, "Botox 100 UI");
        assert!(product.expiry.is_some());
    }

    #[tokio::test]
    async fn should_map_missing_record_to_not_found() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;
        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_invalid_fields_before_writing() {
        let mock_repo = MockProductRepo::new();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut p = params();
        p.price = -1.0;
        let result = use_case.execute(p).await;
        assert!(matches!(result.unwrap_err(), ProductError::NegativePrice));
    }
}
