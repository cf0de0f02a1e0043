//! Stores - CRUD over one collection of records.
//!
//! A store owns the in-memory collection for one record kind and is the only
//! path to it: callers get snapshots back, never the live list. The
//! file-backed implementation persists the collection as a JSON document and
//! rewrites it wholesale on every mutation.
//!
//! ## Example
//!
//! ```ignore
//! use stashed_rust::{JsonFileStore, Store};
//!
//! let store: JsonFileStore<Product> = JsonFileStore::open()?;
//! let stored = store.add(Product::new("Mouse", 59.90))?;
//! let found = store.get_by_id(stored.id())?;
//! ```

mod in_memory;
mod json_file;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;

use uuid::Uuid;

use crate::error::StoreError;
use crate::record::Record;

/// CRUD surface over one collection of records.
pub trait Store<R: Record>: Send + Sync {
    /// Append a record to the collection and persist.
    ///
    /// A record arriving with the nil `Uuid` is assigned a fresh identity.
    /// Returns the record as stored. On persistence failure the in-memory
    /// collection is rolled back to its previous state.
    fn add(&self, record: R) -> Result<R, StoreError>;

    /// Get a record by ID. Returns None if not found.
    fn get_by_id(&self, id: Uuid) -> Result<Option<R>, StoreError>;

    /// Snapshot of the full collection in insertion order. Never writes.
    fn list(&self) -> Result<Vec<R>, StoreError>;

    /// Replace the record with the same ID wholesale and persist.
    ///
    /// An ID not present in the collection is a silent no-op; callers that
    /// need a hard failure pre-check with `get_by_id`.
    fn update(&self, record: &R) -> Result<(), StoreError>;

    /// Remove a record by ID and persist. Returns true if one existed.
    fn remove(&self, id: Uuid) -> Result<bool, StoreError>;
}
