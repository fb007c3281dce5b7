use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::item::Item;
use crate::errors::{AppError, FieldError};

pub const NAME_MAX_CHARS: usize = 50;
pub const PRICE_MIN: i32 = 1;
pub const PRICE_MAX: i32 = 1000;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Missing fields deserialize to `None` so that `validate` can report them
/// per field alongside range errors.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateItemDto {
    #[serde(default)]
    #[schema(value_type = String, example = "Widget")]
    pub name: Option<String>,
    /// Decimal price, as a JSON number or string, e.g. 10 or "9.99"
    #[serde(default, deserialize_with = "exact_price")]
    #[schema(value_type = String, example = "9.99")]
    pub price: Option<BigDecimal>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateItemDto {
    #[serde(default)]
    #[schema(value_type = String, example = "Widget")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "exact_price")]
    #[schema(value_type = String, example = "9.99")]
    pub price: Option<BigDecimal>,
}

/// An item as returned by the API. `price` is always emitted as a JSON
/// string (e.g. `"10"`), never as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReadItemDto {
    pub id: Uuid,
    pub name: String,
    /// Decimal price rendered as a JSON string, e.g. "10" or "9.99", to avoid
    /// floating-point rounding
    #[schema(value_type = String, example = "9.99")]
    pub price: BigDecimal,
    pub created_date: DateTime<Utc>,
}

impl From<Item> for ReadItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            created_date: item.created_date,
        }
    }
}

/// Parses a price from the literal JSON text so that `9.99` stays `9.99`
/// instead of passing through `f64`. Relies on serde_json's
/// `arbitrary_precision`, which keeps a number's original digits.
fn exact_price<'de, D>(deserializer: D) -> Result<Option<BigDecimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(None),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s,
        other => {
            return Err(D::Error::custom(format!(
                "price must be a decimal number, got {other}"
            )))
        }
    };
    BigDecimal::from_str(text.trim())
        .map(Some)
        .map_err(|_| D::Error::custom(format!("price must be a decimal number, got '{text}'")))
}

// ── Validation ───────────────────────────────────────────────────────────────

fn validate_fields(
    name: Option<String>,
    price: Option<BigDecimal>,
) -> Result<(String, BigDecimal), AppError> {
    let mut errors = Vec::new();

    match name.as_deref() {
        None => errors.push(FieldError {
            field: "name",
            message: "name is required".to_string(),
        }),
        Some(n) if n.trim().is_empty() => errors.push(FieldError {
            field: "name",
            message: "name is required".to_string(),
        }),
        Some(n) if n.chars().count() > NAME_MAX_CHARS => errors.push(FieldError {
            field: "name",
            message: format!("name must be at most {NAME_MAX_CHARS} characters"),
        }),
        Some(_) => {}
    }

    match &price {
        None => errors.push(FieldError {
            field: "price",
            message: "price is required".to_string(),
        }),
        Some(p) if *p < BigDecimal::from(PRICE_MIN) || *p > BigDecimal::from(PRICE_MAX) => {
            errors.push(FieldError {
                field: "price",
                message: format!("price must be between {PRICE_MIN} and {PRICE_MAX}"),
            })
        }
        Some(_) => {}
    }

    match (name, price) {
        (Some(name), Some(price)) if errors.is_empty() => Ok((name, price)),
        _ => Err(AppError::Validation(errors)),
    }
}

impl CreateItemDto {
    /// Checks every field and hands back the validated name and price.
    pub fn validate(self) -> Result<(String, BigDecimal), AppError> {
        validate_fields(self.name, self.price)
    }
}

impl UpdateItemDto {
    pub fn validate(self) -> Result<(String, BigDecimal), AppError> {
        validate_fields(self.name, self.price)
    }
}
