use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::expiry;
use crate::domain::product::model::{NewProductProps, Product, ProductFields};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let fields = ProductFields::new(NewProductProps {
            name: params.name,
            price: params.price,
            quantity: params.quantity,
            brand: params.brand,
            category: params.category,
            volume: params.volume,
            expiry: params.expiry.as_ref().and_then(expiry::parse),
        })?;

        let product = self.repository.add(&fields).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::expiry::ExpiryInput;
    use crate::domain::product::model::ProductId;
    use chrono::NaiveDate;
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

    fn params(name: &str) -> CreateProductParams {
        CreateProductParams {
            name: name.to_string(),
            price: 450.0,
            quantity: 12,
            brand: "Allergan".to_string(),
            category: Some("Toxinas".to_string()),
            volume: Some("50 UI".to_string()),
            expiry: Some(ExpiryInput::Text("01/01/2031".to_string())),
        }
    }

    #[tokio::test]
    async fn should_create_product_with_normalized_expiry() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_add().returning(|fields| {
            Ok(Product::from_repository(
                ProductId::new("doc-1"),
                fields.clone(),
            ))
        });

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case.execute(params("Botox 50 UI")).await.unwrap();
        assert_eq!(product.id, ProductId::new("doc-1"));
        assert_eq!(product.expiry, NaiveDate::from_ymd_opt(2031, 1, 1));
    }

    #[tokio::test]
    async fn should_store_no_expiry_for_malformed_input() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_add().returning(|fields| {
            Ok(Product::from_repository(
                ProductId::new("doc-2"),
                fields.clone(),
            ))
        });

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut p = params("Botox 50 UI");
        p.expiry = Some(ExpiryInput::Text("sem data".to_string()));
        let product = use_case.execute(p).await.unwrap();
        assert_eq!(product.expiry, None);
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_empty() {
        let mock_repo = MockProductRepo::new();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut p = params("");
        p.name = String::new();
        let result = use_case.execute(p).await;
        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_propagate_backend_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_add()
            .returning(|_| Err(RepositoryError::Backend));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Botox 50 UI")).await;
        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::Backend)
        ));
    }
}
