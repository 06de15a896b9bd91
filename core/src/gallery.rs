//! Bounded, ordered, persisted gallery of recent clips.
//!
//! Entries are kept newest-first and the list never exceeds the configured
//! cap; inserting past the cap evicts the oldest entries. The whole list is
//! persisted as one JSON array under a single fixed key. Anything wrong
//! with the persisted data - absent, unreadable, malformed - degrades to an
//! empty gallery, never to a failure.

use crate::storage::error::StorageError;
use crate::storage::KeyValueStore;
use crate::types::{GalleryConfig, GalleryEntry};

pub struct Gallery {
    cap: usize,
    storage_key: String,
    entries: Vec<GalleryEntry>,
}

impl Gallery {
    /// Loads the persisted gallery. Malformed or missing data yields an
    /// empty gallery.
    pub fn load(store: &dyn KeyValueStore, config: &GalleryConfig) -> Self {
        let entries = match store.get(&config.storage_key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<GalleryEntry>>(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(error = %err, "discarding malformed gallery data");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "gallery storage unreadable, starting empty");
                Vec::new()
            }
        };

        Self {
            cap: config.cap,
            storage_key: config.storage_key.clone(),
            entries,
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepends an entry, evicting beyond the cap, and persists the result.
    /// Returns the evicted entries so their clip references can be released.
    pub fn insert(
        &mut self,
        store: &mut dyn KeyValueStore,
        entry: GalleryEntry,
    ) -> Result<Vec<GalleryEntry>, StorageError> {
        self.entries.insert(0, entry);

        let evicted = if self.entries.len() > self.cap {
            self.entries.split_off(self.cap)
        } else {
            Vec::new()
        };

        self.persist(store)?;
        Ok(evicted)
    }

    /// Erases all entries. Idempotent: clearing an empty gallery leaves it
    /// empty. Confirmation happens in the presentation layer before this is
    /// called.
    pub fn clear(&mut self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        self.entries.clear();
        store.remove(&self.storage_key)?;
        Ok(())
    }

    fn persist(&self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.entries).expect("serialization failed");
        store.set(&self.storage_key, &json)
    }
}
