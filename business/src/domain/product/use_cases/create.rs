use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::expiry::ExpiryInput;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub brand: String,
    pub category: Option<String>,
    pub volume: Option<String>,
    pub expiry: Option<ExpiryInput>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
