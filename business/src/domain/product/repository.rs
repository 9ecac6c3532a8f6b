use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductFields, ProductId};

/// Port over the external document collection. No transactions: bulk
/// operations are sequences of independent single-record calls.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    /// The backend assigns the id; the stored record comes back.
    async fn add(&self, fields: &ProductFields) -> Result<Product, RepositoryError>;
    async fn update(&self, id: &ProductId, fields: &ProductFields)
    -> Result<(), RepositoryError>;
    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
}
