use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductFields, ProductId};
use business::domain::product::repository::ProductRepository;

use crate::client::FirebaseClient;

use super::document::{self, COLLECTION, FIELD_PATHS};

/// Documents fetched per list page. The whole collection is read on
/// every `get_all`; filtering and sorting happen client-side.
const LIST_PAGE_SIZE: u32 = 300;

pub struct FirestoreProductRepository {
    client: FirebaseClient,
}

impl FirestoreProductRepository {
    pub fn new(client: FirebaseClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<DocumentResponse>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DocumentResponse {
    name: String,
    #[serde(default)]
    fields: Value,
}

impl DocumentResponse {
    fn into_domain(self) -> Result<Product, RepositoryError> {
        document::to_domain(&self.name, &self.fields)
    }
}

#[async_trait]
impl ProductRepository for FirestoreProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut products = Vec::new();
        let mut page_token: Option<String> = None;

        let page_size = LIST_PAGE_SIZE.to_string();
        loop {
            let mut request = self
                .client
                .client
                .get(self.client.collection_url(COLLECTION))
                .query(&[
                    ("key", self.client.api_key.as_str()),
                    ("pageSize", page_size.as_str()),
                ]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = request
                .send()
                .await
                .map_err(|_| RepositoryError::Backend)?;
            if !response.status().is_success() {
                return Err(RepositoryError::Backend);
            }

            let page: ListResponse = response
                .json()
                .await
                .map_err(|_| RepositoryError::Persistence)?;
            for doc in page.documents {
                products.push(doc.into_domain()?);
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(products)
    }

    async fn add(&self, fields: &ProductFields) -> Result<Product, RepositoryError> {
        let body = json!({ "fields": document::fields_json(fields) });

        let response = self
            .client
            .client
            .post(self.client.collection_url(COLLECTION))
            .query(&[("key", self.client.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|_| RepositoryError::Backend)?;
        if !response.status().is_success() {
            return Err(RepositoryError::Backend);
        }

        let doc: DocumentResponse = response
            .json()
            .await
            .map_err(|_| RepositoryError::Persistence)?;
        doc.into_domain()
    }

    async fn update(
        &self,
        id: &ProductId,
        fields: &ProductFields,
    ) -> Result<(), RepositoryError> {
        let body = json!({ "fields": document::fields_json(fields) });

        // The full field-path mask clears optionals the new state omits;
        // the existence precondition turns a missing record into 404.
        let mut query: Vec<(&str, &str)> = vec![
            ("key", self.client.api_key.as_str()),
            ("currentDocument.exists", "true"),
        ];
        for path in FIELD_PATHS {
            query.push(("updateMask.fieldPaths", path));
        }

        let response = self
            .client
            .client
            .patch(self.client.document_url(COLLECTION, id.as_str()))
            .query(&query)
            .json(&body)
            .send()
            .await
            .map_err(|_| RepositoryError::Backend)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RepositoryError::NotFound);
        }
        if !response.status().is_success() {
            return Err(RepositoryError::Backend);
        }
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let response = self
            .client
            .client
            .delete(self.client.document_url(COLLECTION, id.as_str()))
            .query(&[("key", self.client.api_key.as_str())])
            .send()
            .await
            .map_err(|_| RepositoryError::Backend)?;

        if !response.status().is_success() {
            return Err(RepositoryError::Backend);
        }
        Ok(())
    }
}
