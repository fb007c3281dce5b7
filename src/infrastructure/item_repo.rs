use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::{Client, Collection};
use uuid::Uuid;

use crate::db::{items_collection, DATABASE_NAME};
use crate::domain::errors::DomainError;
use crate::domain::item::Item;
use crate::domain::ports::AsyncItemRepository;

use super::models::{id_filter, ItemDocument};

const DUPLICATE_KEY_CODE: i32 = 11000;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<MongoError> for DomainError {
    fn from(e: MongoError) -> Self {
        match e.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. } => DomainError::StoreUnavailable(e.to_string()),
            _ => DomainError::Internal(e.to_string()),
        }
    }
}

pub(super) fn insert_error(e: MongoError, id: Uuid) -> DomainError {
    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(w)) if w.code == DUPLICATE_KEY_CODE => {
            DomainError::DuplicateKey(id)
        }
        _ => e.into(),
    }
}

pub(super) fn into_items(docs: Vec<ItemDocument>) -> Result<Vec<Item>, DomainError> {
    docs.into_iter().map(Item::try_from).collect()
}

// ── Repository ────────────────────────────────────────────────────────────────

/// Item store backed by the async MongoDB driver.
#[derive(Clone)]
pub struct MongoItemRepository {
    client: Client,
    items: Collection<ItemDocument>,
}

impl MongoItemRepository {
    pub fn new(client: Client) -> Self {
        let items = items_collection(&client);
        Self { client, items }
    }
}

#[async_trait]
impl AsyncItemRepository for MongoItemRepository {
    async fn list(&self) -> Result<Vec<Item>, DomainError> {
        let docs: Vec<ItemDocument> = self.items.find(doc! {}).await?.try_collect().await?;
        into_items(docs)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Item>, DomainError> {
        self.items
            .find_one(id_filter(id))
            .await?
            .map(Item::try_from)
            .transpose()
    }

    async fn create(&self, item: &Item) -> Result<(), DomainError> {
        self.items
            .insert_one(ItemDocument::from(item))
            .await
            .map_err(|e| insert_error(e, item.id))?;
        Ok(())
    }

    async fn update(&self, item: &Item) -> Result<bool, DomainError> {
        let result = self
            .items
            .replace_one(id_filter(item.id), ItemDocument::from(item))
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = self.items.delete_one(id_filter(id)).await?;
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.client
            .database(DATABASE_NAME)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}
