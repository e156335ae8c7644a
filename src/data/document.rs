//! Generic persistent JSON document store.
//!
//! Both application documents are whole JSON files replaced on every
//! mutation; there is no in-memory cache across calls. A store serializes
//! access with one async mutex per document: `update` holds the lock across
//! the full load-mutate-save cycle, so two logically concurrent mutations
//! cannot both read the same on-disk state and silently lose the first
//! writer's save. Saves write to a sibling temporary file and rename over the
//! target, so a concurrent reader never observes a half-written document.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::error::store::StoreError;
use crate::util::normalize::tidy_document;

/// A whole-file JSON document with create-if-absent materialization.
///
/// Numbers are normalized on every load and save, so whole values are stored
/// as integers regardless of whether they arrived as floats.
pub struct DocumentStore<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _document: PhantomData<T>,
}

impl<T> DocumentStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Opens the document at `path`, materializing `default` first when no
    /// file exists there.
    ///
    /// The existing content is parsed once during open, so a corrupt document
    /// surfaces at startup rather than on the first mutation.
    ///
    /// # Arguments
    /// - `path` - Location of the JSON document
    /// - `default` - Document written when `path` does not exist yet
    ///
    /// # Returns
    /// - `Ok(DocumentStore)` - Store ready for reads and updates
    /// - `Err(StoreError::Corrupt)` - Existing content cannot be parsed
    /// - `Err(StoreError::Io)` - Filesystem failure
    pub fn open(path: impl AsRef<Path>, default: &T) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            write_document(&path, default)?;
        }

        let store = Self {
            path,
            lock: Mutex::new(()),
            _document: PhantomData,
        };
        store.load()?;
        Ok(store)
    }

    /// Location of the document on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current document.
    ///
    /// # Returns
    /// - `Ok(T)` - The parsed, normalized document
    /// - `Err(StoreError::Corrupt)` - Content cannot be parsed
    /// - `Err(StoreError::Io)` - Filesystem failure
    pub async fn read(&self) -> Result<T, StoreError> {
        let _guard = self.lock.lock().await;
        self.load()
    }

    /// Applies `f` to the document and persists the result.
    ///
    /// The store lock is held for the entire load-mutate-save cycle.
    ///
    /// # Arguments
    /// - `f` - Mutation applied to the freshly loaded document
    ///
    /// # Returns
    /// - `Ok(R)` - The mutation's return value, after a successful save
    /// - `Err(StoreError)` - Load or save failure; the document is unchanged
    pub async fn update<F, R>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut T) -> R,
    {
        let _guard = self.lock.lock().await;
        let mut document = self.load()?;
        let result = f(&mut document);
        write_document(&self.path, &document)?;
        Ok(result)
    }

    /// Applies `f` to the document and persists only when `f` reports a
    /// change.
    ///
    /// Used by idempotent operations (membership hooks, the retention sweep,
    /// rank removal) so a no-op call does not rewrite the file.
    ///
    /// # Arguments
    /// - `f` - Mutation returning `(changed, result)`; the save is skipped
    ///   when `changed` is false
    ///
    /// # Returns
    /// - `Ok(R)` - The mutation's result
    /// - `Err(StoreError)` - Load or save failure
    pub async fn update_if<F, R>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut T) -> (bool, R),
    {
        let _guard = self.lock.lock().await;
        let mut document = self.load()?;
        let (changed, result) = f(&mut document);
        if changed {
            write_document(&self.path, &document)?;
        }
        Ok(result)
    }

    fn load(&self) -> Result<T, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        tidy_document(&mut value);

        serde_json::from_value(value).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }
}

/// Serializes `document`, normalizes its numbers, and atomically replaces
/// `path` via a temporary sibling file and rename.
fn write_document<T: Serialize>(path: &Path, document: &T) -> Result<(), StoreError> {
    let mut value = serde_json::to_value(document).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    tidy_document(&mut value);

    let raw = serde_json::to_string_pretty(&value).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, raw).map_err(|source| StoreError::Io {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
