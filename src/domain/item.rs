use bigdecimal::BigDecimal;
use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// A catalog entry as persisted in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub created_date: DateTime<Utc>,
}

impl Item {
    /// Builds a brand-new item with a fresh identifier and creation time.
    ///
    /// The timestamp is truncated to milliseconds, the resolution of a BSON
    /// datetime, so that reading the item back yields the same value.
    pub fn new(name: String, price: BigDecimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            price,
            created_date: Utc::now().trunc_subsecs(3),
        }
    }

    /// Full-field replacement of the mutable fields. `id` and `created_date`
    /// carry over unchanged.
    pub fn with_details(self, name: String, price: BigDecimal) -> Self {
        Self {
            name,
            price,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_assigns_id_and_recent_created_date() {
        let before = Utc::now();
        let item = Item::new("Widget".to_string(), BigDecimal::from(10));

        assert!(!item.id.is_nil());
        assert!(item.created_date <= Utc::now());
        assert!(before - item.created_date < Duration::seconds(1));
        assert_eq!(item.created_date.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn new_generates_distinct_ids() {
        let a = Item::new("a".to_string(), BigDecimal::from(1));
        let b = Item::new("a".to_string(), BigDecimal::from(1));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn with_details_preserves_identity() {
        let item = Item::new("Widget".to_string(), BigDecimal::from(10));
        let updated = item
            .clone()
            .with_details("Widget2".to_string(), BigDecimal::from(20));

        assert_eq!(updated.id, item.id);
        assert_eq!(updated.created_date, item.created_date);
        assert_eq!(updated.name, "Widget2");
        assert_eq!(updated.price, BigDecimal::from(20));
    }
}
