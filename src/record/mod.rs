//! Records - Identified, serializable entities owned by a store.
//!
//! A record is any plain struct (or closed enum) that a store can persist:
//! it carries a unique `Uuid` identity and names the collection its kind is
//! persisted under.
//!
//! ## Example
//!
//! ```ignore
//! use stashed_rust::{Record, Uuid};
//!
//! #[derive(Clone, Serialize, Deserialize, Record)]
//! struct Product {
//!     pub id: Uuid,
//!     pub name: String,
//! }
//!
//! let product = Product { id: Uuid::new_v4(), name: "Mouse".into() };
//! assert_eq!(Product::COLLECTION, "products");
//! ```

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// Trait for types that can be stored as records.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this record type (e.g., "products",
    /// "menu_items"). Determines the stem of the persisted document.
    const COLLECTION: &'static str;

    /// Returns the unique identifier for this record.
    ///
    /// A nil `Uuid` marks a record that has not been stored yet; the store
    /// assigns a fresh identity on `add`.
    fn id(&self) -> Uuid;

    /// Sets the unique identifier for this record.
    fn set_id(&mut self, id: Uuid);
}
