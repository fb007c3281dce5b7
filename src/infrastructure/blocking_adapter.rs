use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::item::Item;
use crate::domain::ports::{AsyncItemRepository, ItemRepository};

/// Serves a blocking [`ItemRepository`] to async callers by running each call
/// on actix's blocking thread pool.
pub struct BlockingAdapter<R> {
    inner: Arc<R>,
}

impl<R: ItemRepository> BlockingAdapter<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    async fn run<T, F>(&self, f: F) -> Result<T, DomainError>
    where
        T: Send + 'static,
        F: FnOnce(&R) -> Result<T, DomainError> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        web::block(move || f(&inner))
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?
    }
}

#[async_trait]
impl<R: ItemRepository> AsyncItemRepository for BlockingAdapter<R> {
    async fn list(&self) -> Result<Vec<Item>, DomainError> {
        self.run(|repo| repo.list()).await
    }

    async fn get(&self, id: Uuid) -> Result<Option<Item>, DomainError> {
        self.run(move |repo| repo.get(id)).await
    }

    async fn create(&self, item: &Item) -> Result<(), DomainError> {
        let item = item.clone();
        self.run(move |repo| repo.create(&item)).await
    }

    async fn update(&self, item: &Item) -> Result<bool, DomainError> {
        let item = item.clone();
        self.run(move |repo| repo.update(&item)).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.run(move |repo| repo.delete(id)).await
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.run(|repo| repo.ping()).await
    }
}
