//! Emitter - Change notifications for store mutations.
//!
//! Wraps any store and fires local callbacks after successful mutations.
//! Events are named `<collection>:<action>`, the payload is the record as
//! JSON (the removed record's id for `removed`). Failed mutations emit
//! nothing, so listeners only ever observe persisted state.
//!
//! # Example
//!
//! ```ignore
//! use stashed_rust::{EmittingStore, InMemoryStore, Store};
//!
//! let store = EmittingStore::new(InMemoryStore::new());
//!
//! store.on("products:added", |data| {
//!     println!("Product added: {}", data);
//! });
//!
//! store.add(product)?;
//! ```

use std::marker::PhantomData;
use std::sync::Mutex;

use event_emitter_rs::EventEmitter;
use uuid::Uuid;

use crate::error::StoreError;
use crate::record::Record;
use crate::store::Store;

/// Store decorator that emits an event after each successful mutation.
pub struct EmittingStore<S, R> {
    inner: S,
    emitter: Mutex<EventEmitter>,
    _record: PhantomData<R>,
}

impl<S, R> EmittingStore<S, R>
where
    S: Store<R>,
    R: Record,
{
    /// Wrap a store with emitter capabilities.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            emitter: Mutex::new(EventEmitter::new()),
            _record: PhantomData,
        }
    }

    /// Get a reference to the underlying store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap and return the underlying store.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Register a listener for an event type (e.g. `"products:added"`).
    pub fn on<F>(&self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        if let Ok(mut emitter) = self.emitter.lock() {
            emitter.on(event, listener);
        }
    }

    fn emit(&self, action: &str, payload: String) {
        if let Ok(mut emitter) = self.emitter.lock() {
            emitter.emit(&format!("{}:{}", R::COLLECTION, action), payload);
        }
    }

    fn emit_record(&self, action: &str, record: &R) {
        if let Ok(payload) = serde_json::to_string(record) {
            self.emit(action, payload);
        }
    }
}

impl<S, R> Store<R> for EmittingStore<S, R>
where
    S: Store<R>,
    R: Record,
{
    fn add(&self, record: R) -> Result<R, StoreError> {
        let stored = self.inner.add(record)?;
        self.emit_record("added", &stored);
        Ok(stored)
    }

    fn get_by_id(&self, id: Uuid) -> Result<Option<R>, StoreError> {
        self.inner.get_by_id(id)
    }

    fn list(&self) -> Result<Vec<R>, StoreError> {
        self.inner.list()
    }

    fn update(&self, record: &R) -> Result<(), StoreError> {
        // update of a missing id is a silent no-op; only emit for real ones
        let existed = self.inner.get_by_id(record.id())?.is_some();
        self.inner.update(record)?;
        if existed {
            self.emit_record("updated", record);
        }
        Ok(())
    }

    fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        let removed = self.inner.remove(id)?;
        if removed {
            self.emit("removed", id.to_string());
        }
        Ok(removed)
    }
}
