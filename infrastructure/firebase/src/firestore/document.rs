use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::{json, Map, Value};

use business::domain::errors::RepositoryError;
use business::domain::product::expiry::{self, ExpiryInput};
use business::domain::product::model::{Product, ProductFields, ProductId};

/// Collection holding the product records.
pub const COLLECTION: &str = "produtos";

// Firestore document field names, kept exactly as the original data set
// uses them.
const FIELD_NAME: &str = "nome";
const FIELD_PRICE: &str = "preco";
const FIELD_QUANTITY: &str = "quantidade";
const FIELD_BRAND: &str = "marca";
const FIELD_CATEGORY: &str = "categoria";
const FIELD_VOLUME: &str = "volume";
const FIELD_EXPIRY: &str = "validade";

/// All writable field paths, for the update mask.
pub const FIELD_PATHS: [&str; 7] = [
    FIELD_NAME,
    FIELD_PRICE,
    FIELD_QUANTITY,
    FIELD_BRAND,
    FIELD_CATEGORY,
    FIELD_VOLUME,
    FIELD_EXPIRY,
];

fn expiry_timestamp(date: NaiveDate) -> Option<DateTime<Utc>> {
    // Noon keeps the calendar day stable when read back through any
    // realistic local offset.
    Some(date.and_hms_opt(12, 0, 0)?.and_utc())
}

/// Serializes product fields into the Firestore `fields` map. Absent
/// optionals are simply omitted (and cleared by the update mask).
pub fn fields_json(fields: &ProductFields) -> Value {
    let mut map = Map::new();
    map.insert(
        FIELD_NAME.to_string(),
        json!({ "stringValue": fields.name }),
    );
    map.insert(
        FIELD_PRICE.to_string(),
        json!({ "doubleValue": fields.price }),
    );
    map.insert(
        FIELD_QUANTITY.to_string(),
        json!({ "integerValue": fields.quantity.to_string() }),
    );
    map.insert(
        FIELD_BRAND.to_string(),
        json!({ "stringValue": fields.brand }),
    );
    map.insert(
        FIELD_CATEGORY.to_string(),
        json!({ "stringValue": fields.category }),
    );
    if let Some(volume) = &fields.volume {
        map.insert(
            FIELD_VOLUME.to_string(),
            json!({ "stringValue": volume }),
        );
    }
    if let Some(ts) = fields.expiry.and_then(expiry_timestamp) {
        map.insert(
            FIELD_EXPIRY.to_string(),
            json!({ "timestampValue": ts.to_rfc3339_opts(SecondsFormat::Secs, true) }),
        );
    }
    Value::Object(map)
}

fn string_field(fields: &Value, name: &str) -> Option<String> {
    fields
        .get(name)?
        .get("stringValue")?
        .as_str()
        .map(str::to_string)
}

fn double_field(fields: &Value, name: &str) -> Option<f64> {
    let value = fields.get(name)?;
    if let Some(n) = value.get("doubleValue").and_then(Value::as_f64) {
        return Some(n);
    }
    // Whole numbers may come back as integerValue strings.
    value.get("integerValue")?.as_str()?.parse().ok()
}

fn integer_field(fields: &Value, name: &str) -> Option<i64> {
    let value = fields.get(name)?;
    if let Some(s) = value.get("integerValue").and_then(Value::as_str) {
        return s.parse().ok();
    }
    value
        .get("doubleValue")
        .and_then(Value::as_f64)
        .map(|n| n as i64)
}

fn timestamp_field(fields: &Value, name: &str) -> Option<DateTime<Utc>> {
    let raw = fields.get(name)?.get("timestampValue")?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Extracts the backend-assigned id from a full document resource name
/// (`projects/…/documents/produtos/<id>`).
pub fn id_from_document_name(name: &str) -> Option<ProductId> {
    name.rsplit('/').next().map(ProductId::new)
}

/// Maps one Firestore document back into the domain model. Unknown or
/// missing shapes degrade field by field rather than failing the whole
/// record; the required fields must be present.
pub fn to_domain(document_name: &str, fields: &Value) -> Result<Product, RepositoryError> {
    let id = id_from_document_name(document_name).ok_or(RepositoryError::Persistence)?;
    let name = string_field(fields, FIELD_NAME).ok_or(RepositoryError::Persistence)?;
    let brand = string_field(fields, FIELD_BRAND).unwrap_or_default();
    let category = string_field(fields, FIELD_CATEGORY).unwrap_or_default();
    let price = double_field(fields, FIELD_PRICE).unwrap_or_default();
    let quantity = integer_field(fields, FIELD_QUANTITY)
        .unwrap_or_default()
        .max(0) as u32;
    let volume = string_field(fields, FIELD_VOLUME);
    let expiry = timestamp_field(fields, FIELD_EXPIRY)
        .map(ExpiryInput::Timestamp)
        .as_ref()
        .and_then(expiry::parse);

    Ok(Product {
        id,
        name,
        price,
        quantity,
        brand,
        category,
        volume,
        expiry,
    })
}
