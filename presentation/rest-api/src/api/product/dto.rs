use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::expiry;
use business::domain::product::list_view::{ProjectedPage, SortDirection, SortKey};
use business::domain::product::model::Product;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum SortKeyDto {
    #[oai(rename = "name")]
    Name,
    #[oai(rename = "price")]
    Price,
    #[oai(rename = "quantity")]
    Quantity,
    #[oai(rename = "brand")]
    Brand,
    #[oai(rename = "category")]
    Category,
}

impl From<SortKeyDto> for SortKey {
    fn from(dto: SortKeyDto) -> Self {
        match dto {
            SortKeyDto::Name => SortKey::Name,
            SortKeyDto::Price => SortKey::Price,
            SortKeyDto::Quantity => SortKey::Quantity,
            SortKeyDto::Brand => SortKey::Brand,
            SortKeyDto::Category => SortKey::Category,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum SortDirectionDto {
    #[oai(rename = "ascending")]
    Ascending,
    #[oai(rename = "descending")]
    Descending,
}

impl From<SortDirectionDto> for SortDirection {
    fn from(dto: SortDirectionDto) -> Self {
        match dto {
            SortDirectionDto::Ascending => SortDirection::Ascending,
            SortDirectionDto::Descending => SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub quantity: u32,
    /// Brand name (cannot be empty)
    pub brand: String,
    /// Category, defaulted when omitted or blank
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// Volume description, e.g. "500ml"
    #[oai(skip_serializing_if_is_none)]
    pub volume: Option<String>,
    /// Expiry as typed, "dd/mm/yyyy" or "mm/yy"
    #[oai(skip_serializing_if_is_none)]
    pub expiry: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub quantity: u32,
    /// Brand name (cannot be empty)
    pub brand: String,
    /// Category, defaulted when omitted or blank
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// Volume description, e.g. "500ml"
    #[oai(skip_serializing_if_is_none)]
    pub volume: Option<String>,
    /// Expiry as typed, "dd/mm/yyyy" or "mm/yy"
    #[oai(skip_serializing_if_is_none)]
    pub expiry: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Backend-assigned identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub quantity: u32,
    /// Brand name
    pub brand: String,
    /// Category
    pub category: String,
    /// Volume description
    #[oai(skip_serializing_if_is_none)]
    pub volume: Option<String>,
    /// Expiry rendered as "dd/mm/yyyy", or "Não informado"
    pub expiry_label: String,
    /// Whether the expiry is a known date that has not passed
    pub expiry_valid: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let expiry_valid = product.expiry.is_some_and(expiry::is_future);
        Self {
            id: product.id.to_string(),
            name: product.name,
            price: product.price,
            quantity: product.quantity,
            brand: product.brand,
            category: product.category,
            volume: product.volume,
            expiry_label: expiry::format_optional(product.expiry),
            expiry_valid,
        }
    }
}

/// One rendered page of the product table plus pager figures and the
/// ids a select-all would target under the current filter.
#[derive(Debug, Clone, Object)]
pub struct ProductViewResponse {
    pub items: Vec<ProductResponse>,
    /// Page actually shown, clamped to the available range
    pub page: u64,
    pub total_pages: u64,
    /// Every id matching the filter, across all pages
    pub visible_ids: Vec<String>,
}

impl ProductViewResponse {
    pub fn from_projection(projection: ProjectedPage, visible_ids: Vec<String>) -> Self {
        Self {
            items: projection.items.into_iter().map(|p| p.into()).collect(),
            page: projection.page as u64,
            total_pages: projection.total_pages as u64,
            visible_ids,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DeleteBatchRequest {
    /// Ids of the products to remove
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct DeleteBatchResponse {
    /// Records actually removed
    pub succeeded: u64,
    /// Records that could not be removed
    pub failed: u64,
}
