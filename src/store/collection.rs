//! Collection storage trait.
//!
//! Defines the interface for persisting the item collection as a single unit.

use async_trait::async_trait;

use crate::item::Item;

use super::error::StorageResult;

/// Storage interface for the item collection.
///
/// Implementations hold no cache: every `load` observes the durable state.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Create an empty collection if none exists yet. Existing data is left alone.
    async fn ensure(&self) -> StorageResult<()>;

    /// Load the whole collection.
    ///
    /// Unreadable contents reset the store to an empty collection, which is
    /// then returned. The caller is not told that data was dropped.
    async fn load(&self) -> StorageResult<Vec<Item>>;

    /// Replace the persisted collection with `items`.
    async fn save(&self, items: &[Item]) -> StorageResult<()>;
}
