use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::import::errors::ImportError;
use business::domain::import::use_cases::import_products::{
    ImportProductsParams, ImportProductsUseCase,
};

use crate::api::error::ErrorResponse;
use crate::api::import::dto::{ImportReportResponse, ImportRequest};
use crate::api::tags::ApiTags;

pub struct ImportApi {
    import_use_case: Arc<dyn ImportProductsUseCase>,
}

impl ImportApi {
    pub fn new(import_use_case: Arc<dyn ImportProductsUseCase>) -> Self {
        Self { import_use_case }
    }
}

/// Spreadsheet import API
///
/// Bulk-loads products from an uploaded XLSX file. Rows that cannot be
/// turned into a product are dropped; each write attempt is logged.
#[OpenApi]
impl ImportApi {
    /// Import products from a spreadsheet
    #[oai(
        path = "/products/import",
        method = "post",
        tag = "ApiTags::Import"
    )]
    async fn import_products(&self, body: Json<ImportRequest>) -> ImportResponse {
        let file = match BASE64.decode(body.0.file_base64.as_bytes()) {
            Ok(file) => file,
            Err(_) => {
                return ImportResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "import.invalid_base64".to_string(),
                }));
            }
        };

        match self
            .import_use_case
            .execute(ImportProductsParams { file })
            .await
        {
            Ok(report) => ImportResponse::Ok(Json(report.into())),
            Err(err) => {
                let message = match err {
                    ImportError::UnreadableFile => "import.unreadable_file",
                    ImportError::EmptyWorkbook => "import.empty_workbook",
                };
                ImportResponse::UnprocessableEntity(Json(ErrorResponse {
                    name: "ImportError".to_string(),
                    message: message.to_string(),
                }))
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ImportResponse {
    #[oai(status = 200)]
    Ok(Json<ImportReportResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
}
