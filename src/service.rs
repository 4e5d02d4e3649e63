//! Item operations over a collection store.
//!
//! Every operation runs a full read (and, for mutations, a full rewrite) of the
//! collection while holding a single lock, so concurrent requests in this
//! process never interleave their read-modify-write cycles.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::item::{self, Item, ItemFields, ItemId};
use crate::store::{CollectionStore, StorageError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("item {0} not found")]
    NotFound(ItemId),

    #[error("no item ids left after {}", ItemId::MAX)]
    IdsExhausted,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Shared handle to the item collection.
#[derive(Clone)]
pub struct ItemService {
    store: Arc<dyn CollectionStore>,
    lock: Arc<Mutex<()>>,
}

impl ItemService {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self {
            store,
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn list(&self) -> ServiceResult<Vec<Item>> {
        let _guard = self.lock.lock().await;
        Ok(self.store.load().await?)
    }

    pub async fn get(&self, id: ItemId) -> ServiceResult<Item> {
        let _guard = self.lock.lock().await;
        let items = self.store.load().await?;
        items
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(ServiceError::NotFound(id))
    }

    pub async fn create(&self, fields: ItemFields) -> ServiceResult<Item> {
        let _guard = self.lock.lock().await;
        let mut items = self.store.load().await?;

        let id = item::next_id(&items).ok_or(ServiceError::IdsExhausted)?;
        let created = Item::new(id, fields);
        items.push(created.clone());
        self.store.save(&items).await?;

        tracing::debug!(id = created.id, "created item");
        Ok(created)
    }

    pub async fn update(&self, id: ItemId, fields: ItemFields) -> ServiceResult<Item> {
        let _guard = self.lock.lock().await;
        let mut items = self.store.load().await?;

        let existing = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ServiceError::NotFound(id))?;
        existing.apply(fields);
        let updated = existing.clone();
        self.store.save(&items).await?;

        tracing::debug!(id, "updated item");
        Ok(updated)
    }

    pub async fn delete(&self, id: ItemId) -> ServiceResult<Item> {
        let _guard = self.lock.lock().await;
        let mut items = self.store.load().await?;

        let index = items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ServiceError::NotFound(id))?;
        let removed = items.remove(index);
        self.store.save(&items).await?;

        tracing::debug!(id, "deleted item");
        Ok(removed)
    }
}
