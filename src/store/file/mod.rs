//! File-based storage implementations.
//!
//! The collection is kept as a pretty-printed JSON array in a single file.
//! Writes go through a temp file + rename so readers never observe a partial write.

mod collection;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tokio::fs;

use super::error::{StorageError, StorageResult};

pub use collection::FileCollectionStore;

/// Write `contents` to `tmp_path`, then rename it over `path`.
pub(crate) async fn atomic_write_file(
    tmp_path: &Path,
    path: &Path,
    contents: &[u8],
) -> StorageResult<()> {
    fs::write(tmp_path, contents)
        .await
        .map_err(|e| StorageError::file_io(tmp_path, e))?;

    fs::rename(tmp_path, path)
        .await
        .map_err(|e| StorageError::file_io(path, e))
}

/// Sibling path used for staging writes to `path` (`items.json` -> `items.json.tmp`).
pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("store"));
    name.push(".tmp");
    path.with_file_name(name)
}
