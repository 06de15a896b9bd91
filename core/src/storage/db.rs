//! redb-backed key-value store.

use crate::storage::error::StorageError;
use crate::storage::KeyValueStore;
use redb::{ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;

/// Single table: key string → serialized value string.
const STORE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("store");

/// Durable store wrapping redb. One table is enough; the gallery lives
/// under a single fixed key.
pub struct RedbStore {
    db: redb::Database,
}

impl RedbStore {
    /// Creates or opens the database at the given path.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = redb::Database::create(path)?;

        // Initialize the table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(STORE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(STORE_TABLE)?;

        match table.get(key)? {
            None => Ok(None),
            Some(guard) => Ok(Some(guard.value().to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STORE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STORE_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
