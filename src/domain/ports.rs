use async_trait::async_trait;
use uuid::Uuid;

use super::errors::DomainError;
use super::item::Item;

/// Blocking access to the item store. Callers on an async runtime must go
/// through [`crate::infrastructure::BlockingAdapter`].
pub trait ItemRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<Item>, DomainError>;
    fn get(&self, id: Uuid) -> Result<Option<Item>, DomainError>;
    fn create(&self, item: &Item) -> Result<(), DomainError>;
    /// Replaces the stored record with the same id. `Ok(false)` if none matched.
    fn update(&self, item: &Item) -> Result<bool, DomainError>;
    /// `Ok(false)` if no record had this id.
    fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
    fn ping(&self) -> Result<(), DomainError>;
}

/// Non-blocking access to the item store; what the HTTP handlers depend on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AsyncItemRepository: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<Item>, DomainError>;
    async fn get(&self, id: Uuid) -> Result<Option<Item>, DomainError>;
    async fn create(&self, item: &Item) -> Result<(), DomainError>;
    async fn update(&self, item: &Item) -> Result<bool, DomainError>;
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
    async fn ping(&self) -> Result<(), DomainError>;
}
