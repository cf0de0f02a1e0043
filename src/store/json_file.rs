use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::codec;
use crate::error::StoreError;
use crate::record::Record;

use super::Store;

/// File-backed store: one JSON document per record kind.
///
/// The document location is derived from `R::COLLECTION` alone, so callers
/// never supply paths. The collection is loaded once at open; every mutation
/// rewrites the whole document through a temp file and rename, so the
/// document on disk is always either the previous or the new version.
///
/// Clone-friendly via Arc: clones share the same collection and document.
pub struct JsonFileStore<R: Record> {
    path: PathBuf,
    records: Arc<RwLock<Vec<R>>>,
}

impl<R: Record> Clone for JsonFileStore<R> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            records: Arc::clone(&self.records),
        }
    }
}

impl<R: Record> fmt::Debug for JsonFileStore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("collection", &R::COLLECTION)
            .field("path", &self.path)
            .finish()
    }
}

impl<R: Record> JsonFileStore<R> {
    /// Open the store with its document in the current directory.
    ///
    /// A missing document is an empty collection. A document that exists but
    /// does not parse fails fast with `MalformedDocument`; the store never
    /// degrades a corrupt document to an empty collection, since the next
    /// mutation would overwrite it.
    pub fn open() -> Result<Self, StoreError> {
        Self::open_in(".")
    }

    /// Open the store with its document under the given directory.
    pub fn open_in(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = dir.as_ref().join(format!("{}.json", R::COLLECTION));
        let records = Self::load(&path)?;
        Ok(Self {
            path,
            records: Arc::new(RwLock::new(records)),
        })
    }

    /// Path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Discard the in-memory collection and re-read the persisted document.
    pub fn reload(&self) -> Result<(), StoreError> {
        let fresh = Self::load(&self.path)?;
        let mut records = self.write_lock("reload")?;
        *records = fresh;
        Ok(())
    }

    /// Number of records in the collection.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read_lock("len")?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn load(path: &Path) -> Result<Vec<R>, StoreError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(persistence_error::<R>(err)),
        };
        codec::decode(&bytes)
    }

    fn save(&self, records: &[R]) -> Result<(), StoreError> {
        let bytes = codec::encode(records)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(persistence_error::<R>)?;
            }
        }

        // Full rewrite through a temp file so the previous document survives
        // a failed write intact.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).map_err(persistence_error::<R>)?;
        fs::rename(&tmp, &self.path).map_err(persistence_error::<R>)?;
        Ok(())
    }

    fn read_lock(
        &self,
        operation: &'static str,
    ) -> Result<std::sync::RwLockReadGuard<'_, Vec<R>>, StoreError> {
        self.records
            .read()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    fn write_lock(
        &self,
        operation: &'static str,
    ) -> Result<std::sync::RwLockWriteGuard<'_, Vec<R>>, StoreError> {
        self.records
            .write()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }
}

fn persistence_error<R: Record>(err: io::Error) -> StoreError {
    StoreError::Persistence {
        collection: R::COLLECTION,
        detail: err.to_string(),
    }
}

impl<R: Record> Store<R> for JsonFileStore<R> {
    fn add(&self, mut record: R) -> Result<R, StoreError> {
        if record.id().is_nil() {
            record.set_id(Uuid::new_v4());
        }

        let mut records = self.write_lock("add")?;
        records.push(record.clone());
        if let Err(err) = self.save(&records) {
            records.pop();
            return Err(err);
        }
        Ok(record)
    }

    fn get_by_id(&self, id: Uuid) -> Result<Option<R>, StoreError> {
        let records = self.read_lock("get")?;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    fn list(&self) -> Result<Vec<R>, StoreError> {
        Ok(self.read_lock("list")?.clone())
    }

    fn update(&self, record: &R) -> Result<(), StoreError> {
        let mut records = self.write_lock("update")?;
        let index = match records.iter().position(|r| r.id() == record.id()) {
            Some(index) => index,
            None => return Ok(()),
        };

        let previous = std::mem::replace(&mut records[index], record.clone());
        if let Err(err) = self.save(&records) {
            records[index] = previous;
            return Err(err);
        }
        Ok(())
    }

    fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut records = self.write_lock("remove")?;
        let index = match records.iter().position(|r| r.id() == id) {
            Some(index) => index,
            None => return Ok(false),
        };

        let removed = records.remove(index);
        if let Err(err) = self.save(&records) {
            records.insert(index, removed);
            return Err(err);
        }
        Ok(true)
    }
}
