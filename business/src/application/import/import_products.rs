use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::import::errors::ImportError;
use crate::domain::import::reconciler::reconcile;
use crate::domain::import::report::ImportReport;
use crate::domain::import::row::{CandidateProduct, RowOutcome};
use crate::domain::import::row_source::RowSource;
use crate::domain::import::use_cases::import_products::{
    ImportProductsParams, ImportProductsUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::expiry;
use crate::domain::product::model::{NewProductProps, ProductFields};
use crate::domain::product::repository::ProductRepository;

pub struct ImportProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub row_source: Arc<dyn RowSource>,
    pub logger: Arc<dyn Logger>,
}

fn fields_from(candidate: &CandidateProduct) -> Result<ProductFields, String> {
    ProductFields::new(NewProductProps {
        name: candidate.name.clone(),
        price: candidate.price,
        quantity: candidate.quantity,
        brand: candidate.brand.clone(),
        category: candidate.category.clone(),
        volume: None,
        expiry: candidate.expiry.as_ref().and_then(expiry::parse),
    })
    .map_err(|e| e.to_string())
}

#[async_trait]
impl ImportProductsUseCase for ImportProductsUseCaseImpl {
    async fn execute(&self, params: ImportProductsParams) -> Result<ImportReport, ImportError> {
        let raw_rows = self.row_source.read(&params.file)?;
        let mut rows = reconcile(&raw_rows);

        let candidates = rows
            .iter()
            .filter(|r| r.outcome == RowOutcome::Pending)
            .count();
        self.logger
            .info(&format!("Import started: {candidates} candidate rows"));

        let mut logs = vec![format!(
            "Arquivo anexado. {candidates} produtos foram encontrados."
        )];
        let mut succeeded = 0;
        let mut failed = 0;

        // Strictly sequential: each write is awaited before the next row
        // starts, so log lines always come out in row order. A transient
        // backend failure is that row's final outcome; there is no retry.
        for row in rows.iter_mut() {
            let Some(candidate) = row.candidate.as_ref() else {
                continue;
            };

            let write = match fields_from(candidate) {
                Ok(fields) => self
                    .repository
                    .add(&fields)
                    .await
                    .map_err(|e| e.to_string()),
                Err(reason) => Err(reason),
            };

            match write {
                Ok(_) => {
                    succeeded += 1;
                    row.outcome = RowOutcome::Succeeded;
                    logs.push(format!(
                        "Produto \"{}\" enviado com sucesso.",
                        candidate.name
                    ));
                }
                Err(reason) => {
                    failed += 1;
                    row.outcome = RowOutcome::Failed;
                    self.logger.warn(&format!(
                        "Import row {} failed: {reason}",
                        row.number
                    ));
                    logs.push(format!(
                        "Erro ao enviar produto \"{}\" na linha {}.",
                        candidate.name, row.number
                    ));
                }
            }
        }

        logs.push(format!(
            "Envio concluído: {succeeded} produtos enviados com sucesso, {failed} erros encontrados."
        ));

        let summary = ImportReport::classify(succeeded, failed);
        self.logger.info(&format!(
            "Import finished: {succeeded} succeeded, {failed} failed ({summary:?})"
        ));

        Ok(ImportReport {
            succeeded,
            failed,
            logs,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::import::report::ImportSummary;
    use crate::domain::import::row::{
        CellValue, RawRow, COLUMN_BRAND, COLUMN_NAME, COLUMN_PRICE, COLUMN_QUANTITY,
    };
    use crate::domain::product::model::{Product, ProductId};
    use mockall::mock;
    use std::collections::HashMap;

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
        pub Rows {}

        impl RowSource for Rows {
            fn read(&self, file: &[u8]) -> Result<Vec<RawRow>, ImportError>;
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

    fn complete_row(number: usize, name: &str) -> RawRow {
        let mut cells = HashMap::new();
        cells.insert(
            COLUMN_NAME.to_string(),
            CellValue::Text(name.to_string()),
        );
        cells.insert(COLUMN_PRICE.to_string(), CellValue::Number(99.0));
        cells.insert(COLUMN_QUANTITY.to_string(), CellValue::Number(1.0));
        cells.insert(
            COLUMN_BRAND.to_string(),
            CellValue::Text("Allergan".to_string()),
        );
        RawRow { number, cells }
    }

    fn incomplete_row(number: usize, name: &str) -> RawRow {
        let mut row = complete_row(number, name);
        row.cells.remove(COLUMN_BRAND);
        row
    }

    fn use_case(
        rows: Vec<RawRow>,
        fail_for: &'static [&'static str],
    ) -> ImportProductsUseCaseImpl {
        let mut source = MockRows::new();
        source.expect_read().return_once(move |_| Ok(rows));

        let mut repo = MockProductRepo::new();
        repo.expect_add().returning(move |fields| {
            if fail_for.contains(&fields.name.as_str()) {
                Err(RepositoryError::Backend)
            } else {
                Ok(Product::from_repository(
                    ProductId::new("doc"),
                    fields.clone(),
                ))
            }
        });

        ImportProductsUseCaseImpl {
            repository: Arc::new(repo),
            row_source: Arc::new(source),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_report_success_when_all_rows_import() {
        let rows = vec![complete_row(2, "Botox 50 UI"), complete_row(3, "Dysport")];
        let report = use_case(rows, &[])
            .execute(ImportProductsParams { file: vec![] })
            .await
            .unwrap();

        assert_eq!(report.summary, ImportSummary::Success);
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, 0);
        assert_eq!(
            report.message(),
            "Sucesso: Todos os produtos foram enviados com sucesso!"
        );
    }

    #[tokio::test]
    async fn should_report_partial_run_with_logs_in_row_order() {
        // Row 3 is missing Marca: silently dropped, so only rows 2 and 4
        // are attempted. Row 2's write fails, row 4's succeeds.
        let rows = vec![
            complete_row(2, "Botox 50 UI"),
            incomplete_row(3, "Fantasma"),
            complete_row(4, "Dysport"),
        ];
        let report = use_case(rows, &["Botox 50 UI"])
            .execute(ImportProductsParams { file: vec![] })
            .await
            .unwrap();

        assert_eq!(report.summary, ImportSummary::Partial);
        assert_eq!(report.succeeded, 1);
        assert_eq!(report.failed, 1);

        // Candidate count excludes the dropped row, with no mention of it.
        assert_eq!(
            report.logs[0],
            "Arquivo anexado. 2 produtos foram encontrados."
        );
        assert_eq!(
            report.logs[1],
            "Erro ao enviar produto \"Botox 50 UI\" na linha 2."
        );
        assert_eq!(report.logs[2], "Produto \"Dysport\" enviado com sucesso.");
        assert_eq!(
            report.logs[3],
            "Envio concluído: 1 produtos enviados com sucesso, 1 erros encontrados."
        );
        assert!(!report.logs.iter().any(|l| l.contains("Fantasma")));
    }

    #[tokio::test]
    async fn should_report_failure_when_nothing_succeeds() {
        let rows = vec![complete_row(2, "Botox 50 UI")];
        let report = use_case(rows, &["Botox 50 UI"])
            .execute(ImportProductsParams { file: vec![] })
            .await
            .unwrap();

        assert_eq!(report.summary, ImportSummary::Failure);
        assert_eq!(report.message(), "Falha: Nenhum produto foi enviado.");
    }

    #[tokio::test]
    async fn should_report_failure_for_empty_candidate_set() {
        let rows = vec![incomplete_row(2, "Fantasma")];
        let report = use_case(rows, &[])
            .execute(ImportProductsParams { file: vec![] })
            .await
            .unwrap();

        assert_eq!(report.summary, ImportSummary::Failure);
        assert_eq!(report.succeeded, 0);
        assert_eq!(report.failed, 0);
    }

    #[tokio::test]
    async fn should_surface_unreadable_file() {
        let mut source = MockRows::new();
        source
            .expect_read()
            .returning(|_| Err(ImportError::UnreadableFile));

        let use_case = ImportProductsUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            row_source: Arc::new(source),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ImportProductsParams { file: vec![0x00] })
            .await;
        assert!(matches!(result.unwrap_err(), ImportError::UnreadableFile));
    }
}
