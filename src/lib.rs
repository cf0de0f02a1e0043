mod codec;
mod error;
mod menu;
mod query;
mod record;
mod store;

#[cfg(feature = "emitter")]
mod emitter;

pub use codec::{decode, encode};
pub use error::StoreError;
pub use menu::{Beverage, Dish, MenuItem};
pub use query::{
    age_in_years, by_age_range, by_category, by_status, BornOn, Categorized, QueryExt, Statused,
};
pub use record::Record;
pub use store::{InMemoryStore, JsonFileStore, Store};

#[cfg(feature = "emitter")]
pub use emitter::EmittingStore;

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;

// Re-export Uuid so derived Record impls resolve it through this crate
pub use uuid::Uuid;

// Re-export the derive macro alongside the trait it implements
pub use stashed_rust_macros::Record;
