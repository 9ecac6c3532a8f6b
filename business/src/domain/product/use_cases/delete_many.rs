use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductId;

pub struct DeleteManyProductsParams {
    pub ids: Vec<ProductId>,
}

/// Aggregate outcome of a bulk delete. One failed record never aborts
/// the rest; every id gets its own attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteManyOutcome {
    pub succeeded: usize,
    pub failed: usize,
}

#[async_trait]
pub trait DeleteManyProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: DeleteManyProductsParams,
    ) -> Result<DeleteManyOutcome, ProductError>;
}
