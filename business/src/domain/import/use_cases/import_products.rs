use async_trait::async_trait;

use crate::domain::import::errors::ImportError;
use crate::domain::import::report::ImportReport;

pub struct ImportProductsParams {
    /// Raw spreadsheet file as uploaded.
    pub file: Vec<u8>,
}

#[async_trait]
pub trait ImportProductsUseCase: Send + Sync {
    async fn execute(&self, params: ImportProductsParams) -> Result<ImportReport, ImportError>;
}
