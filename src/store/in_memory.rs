use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::error::StoreError;
use crate::record::Record;

use super::Store;

/// In-memory store backed by a `Vec`.
///
/// Same contract as the file-backed store minus persistence. Useful for
/// tests and callers that want the CRUD surface without a document on disk.
/// Clone-friendly via Arc (cloning shares the same collection).
pub struct InMemoryStore<R: Record> {
    records: Arc<RwLock<Vec<R>>>,
}

impl<R: Record> Clone for InMemoryStore<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<R: Record> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> InMemoryStore<R> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl<R: Record> Store<R> for InMemoryStore<R> {
    fn add(&self, mut record: R) -> Result<R, StoreError> {
        if record.id().is_nil() {
            record.set_id(Uuid::new_v4());
        }

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("add"))?;
        records.push(record.clone());
        Ok(record)
    }

    fn get_by_id(&self, id: Uuid) -> Result<Option<R>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    fn list(&self) -> Result<Vec<R>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("list"))?;
        Ok(records.clone())
    }

    fn update(&self, record: &R) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;
        if let Some(index) = records.iter().position(|r| r.id() == record.id()) {
            records[index] = record.clone();
        }
        Ok(())
    }

    fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("remove"))?;
        match records.iter().position(|r| r.id() == id) {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
