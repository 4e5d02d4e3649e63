//! Storage abstraction for the item collection.
//!
//! The trait lives here; the file-backed implementation lives in [`file`].

mod collection;
mod error;
pub mod file;

pub use collection::CollectionStore;
pub use error::{StorageError, StorageResult};
