use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use mongodb::bson::{doc, DateTime as BsonDateTime, Document};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::item::Item;

/// Stored shape of an item. The id lives in `_id` so the collection's
/// built-in unique index covers point lookups; the price is kept as a decimal
/// string to avoid binary float rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: String,
    pub created_date: BsonDateTime,
}

/// Equality filter on the document key.
pub fn id_filter(id: Uuid) -> Document {
    doc! { "_id": id.to_string() }
}

impl From<&Item> for ItemDocument {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            price: item.price.to_string(),
            created_date: BsonDateTime::from_millis(item.created_date.timestamp_millis()),
        }
    }
}

impl TryFrom<ItemDocument> for Item {
    type Error = DomainError;

    fn try_from(doc: ItemDocument) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&doc.id)
            .map_err(|e| DomainError::Internal(format!("Invalid stored id '{}': {}", doc.id, e)))?;
        let price = BigDecimal::from_str(&doc.price).map_err(|e| {
            DomainError::Internal(format!("Invalid stored price '{}': {}", doc.price, e))
        })?;
        let created_date = DateTime::<Utc>::from_timestamp_millis(doc.created_date.timestamp_millis())
            .ok_or_else(|| {
                DomainError::Internal(format!("Stored created_date out of range for item {id}"))
            })?;

        Ok(Item {
            id,
            name: doc.name,
            price,
            created_date,
        })
    }
}
