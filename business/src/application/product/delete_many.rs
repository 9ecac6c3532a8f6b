use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete_many::{
    DeleteManyOutcome, DeleteManyProductsParams, DeleteManyProductsUseCase,
};

pub struct DeleteManyProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteManyProductsUseCase for DeleteManyProductsUseCaseImpl {
    async fn execute(
        &self,
        params: DeleteManyProductsParams,
    ) -> Result<DeleteManyOutcome, ProductError> {
        self.logger
            .info(&format!("Bulk delete of {} products", params.ids.len()));

        let mut succeeded = 0;
        let mut failed = 0;

        // One delete at a time, each awaited; a failed record is counted
        // and the loop moves on to the next id.
        for id in &params.ids {
            match self.repository.delete(id).await {
                Ok(()) => succeeded += 1,
                Err(e) => {
                    self.logger
                        .warn(&format!("Failed to delete product {id}: {e}"));
                    failed += 1;
                }
            }
        }

        self.logger.info(&format!(
            "Bulk delete done: {succeeded} deleted, {failed} failed"
        ));
        Ok(DeleteManyOutcome { succeeded, failed })
    }
}
