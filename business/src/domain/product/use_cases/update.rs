use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::expiry::ExpiryInput;
use crate::domain::product::model::{Product, ProductId};

/// Inline edit: all writable fields are replaced, identity is preserved.
pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub brand: String,
    pub category: Option<String>,
    pub volume: Option<String>,
    pub expiry: Option<ExpiryInput>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
