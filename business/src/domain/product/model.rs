use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// Category assigned when a product arrives without one.
pub const DEFAULT_CATEGORY: &str = "Sem categoria";

/// Opaque product identifier assigned by the storage backend.
/// Immutable for the lifetime of the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The writable fields of a product record, validated on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub brand: String,
    pub category: String,
    pub volume: Option<String>,
    pub expiry: Option<NaiveDate>,
}

pub struct NewProductProps {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub brand: String,
    pub category: Option<String>,
    pub volume: Option<String>,
    pub expiry: Option<NaiveDate>,
}

impl ProductFields {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.brand.trim().is_empty() {
            return Err(ProductError::BrandEmpty);
        }

        if props.price < 0.0 || !props.price.is_finite() {
            return Err(ProductError::NegativePrice);
        }

        let category = match props.category {
            Some(c) if !c.trim().is_empty() => c,
            _ => DEFAULT_CATEGORY.to_string(),
        };

        Ok(Self {
            name: props.name,
            price: props.price,
            quantity: props.quantity,
            brand: props.brand,
            category,
            volume: props.volume,
            expiry: props.expiry,
        })
    }
}

/// One inventory item as persisted in the backend collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub brand: String,
    pub category: String,
    pub volume: Option<String>,
    pub expiry: Option<NaiveDate>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            quantity: fields.quantity,
            brand: fields.brand,
            category: fields.category,
            volume: fields.volume,
            expiry: fields.expiry,
        }
    }

    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity,
            brand: self.brand.clone(),
            category: self.category.clone(),
            volume: self.volume.clone(),
            expiry: self.expiry,
        }
    }
}
