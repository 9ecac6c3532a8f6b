use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};

use business::domain::product::expiry::ExpiryInput;
use business::domain::product::list_view::{self, ListViewState, SortDirection};
use business::domain::product::model::ProductId;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::delete_many::{
    DeleteManyProductsParams, DeleteManyProductsUseCase,
};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, DeleteBatchRequest, DeleteBatchResponse, ProductResponse,
    ProductViewResponse, SortDirectionDto, SortKeyDto, UpdateProductRequest,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    delete_many_use_case: Arc<dyn DeleteManyProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        delete_many_use_case: Arc<dyn DeleteManyProductsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            update_use_case,
            delete_use_case,
            delete_many_use_case,
        }
    }
}

/// Product management API
///
/// Endpoints for listing, filtering, creating, updating, and deleting
/// inventory products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            price: body.0.price,
            quantity: body.0.quantity,
            brand: body.0.brand,
            category: body.0.category,
            volume: body.0.volume,
            expiry: body.0.expiry.map(ExpiryInput::Text),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    ///
    /// Returns the whole collection, unfiltered and unsorted.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Render one page of the product table
    ///
    /// Filters by substring over name, brand and category, sorts by the
    /// requested column, and returns the page slice plus the ids a
    /// select-all would target under the same filter.
    #[oai(path = "/products/view", method = "get", tag = "ApiTags::Products")]
    async fn get_product_view(
        &self,
        query: Query<Option<String>>,
        sort_key: Query<Option<SortKeyDto>>,
        sort_direction: Query<Option<SortDirectionDto>>,
        page: Query<Option<u64>>,
    ) -> GetProductViewResponse {
        let products = match self.get_all_use_case.execute().await {
            Ok(products) => products,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return GetProductViewResponse::InternalError(json);
            }
        };

        let mut state = ListViewState::new();
        if let Some(q) = query.0 {
            state.set_query(q);
        }
        if let Some(key) = sort_key.0 {
            let direction = sort_direction
                .0
                .map(SortDirection::from)
                .unwrap_or(SortDirection::Ascending);
            state.set_sort(Some((key.into(), direction)));
        }
        if let Some(page) = page.0 {
            state.set_page(page as usize);
        }

        let projection = list_view::project(&products, &state);
        let visible_ids = list_view::visible_ids(&products, state.query())
            .into_iter()
            .map(|id| id.to_string())
            .collect();

        GetProductViewResponse::Ok(Json(ProductViewResponse::from_projection(
            projection,
            visible_ids,
        )))
    }

    /// Update a product
    ///
    /// Replaces every writable field of an existing product.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let params = UpdateProductParams {
            id: ProductId::new(id.0),
            name: body.0.name,
            price: body.0.price,
            quantity: body.0.quantity,
            brand: body.0.brand,
            category: body.0.category,
            volume: body.0.volume,
            expiry: body.0.expiry.map(ExpiryInput::Text),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams {
                id: ProductId::new(id.0),
            })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a batch of products
    ///
    /// Attempts every id independently; one failure never aborts the
    /// rest. Returns how many records were removed and how many failed.
    #[oai(
        path = "/products/delete-batch",
        method = "post",
        tag = "ApiTags::Products"
    )]
    async fn delete_batch(&self, body: Json<DeleteBatchRequest>) -> DeleteBatchApiResponse {
        let params = DeleteManyProductsParams {
            ids: body.0.ids.into_iter().map(ProductId::new).collect(),
        };

        match self.delete_many_use_case.execute(params).await {
            Ok(outcome) => DeleteBatchApiResponse::Ok(Json(DeleteBatchResponse {
                succeeded: outcome.succeeded as u64,
                failed: outcome.failed as u64,
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteBatchApiResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductViewResponse {
    #[oai(status = 200)]
    Ok(Json<ProductViewResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteBatchApiResponse {
    #[oai(status = 200)]
    Ok(Json<DeleteBatchResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
