use mongodb::bson::doc;
use mongodb::sync::{Client, Collection};
use uuid::Uuid;

use crate::db::{blocking_items_collection, DATABASE_NAME};
use crate::domain::errors::DomainError;
use crate::domain::item::Item;
use crate::domain::ports::ItemRepository;

use super::item_repo::{insert_error, into_items};
use super::models::{id_filter, ItemDocument};

/// Item store backed by the blocking MongoDB driver. Every call parks the
/// calling thread until the server answers.
#[derive(Clone)]
pub struct BlockingMongoItemRepository {
    client: Client,
    items: Collection<ItemDocument>,
}

impl BlockingMongoItemRepository {
    pub fn new(client: Client) -> Self {
        let items = blocking_items_collection(&client);
        Self { client, items }
    }
}

impl ItemRepository for BlockingMongoItemRepository {
    fn list(&self) -> Result<Vec<Item>, DomainError> {
        let docs = self
            .items
            .find(doc! {})
            .run()?
            .collect::<Result<Vec<ItemDocument>, _>>()?;
        into_items(docs)
    }

    fn get(&self, id: Uuid) -> Result<Option<Item>, DomainError> {
        self.items
            .find_one(id_filter(id))
            .run()?
            .map(Item::try_from)
            .transpose()
    }

    fn create(&self, item: &Item) -> Result<(), DomainError> {
        self.items
            .insert_one(ItemDocument::from(item))
            .run()
            .map_err(|e| insert_error(e, item.id))?;
        Ok(())
    }

    fn update(&self, item: &Item) -> Result<bool, DomainError> {
        let result = self
            .items
            .replace_one(id_filter(item.id), ItemDocument::from(item))
            .run()?;
        Ok(result.matched_count > 0)
    }

    fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = self.items.delete_one(id_filter(id)).run()?;
        Ok(result.deleted_count > 0)
    }

    fn ping(&self) -> Result<(), DomainError> {
        self.client
            .database(DATABASE_NAME)
            .run_command(doc! { "ping": 1 })
            .run()?;
        Ok(())
    }
}
