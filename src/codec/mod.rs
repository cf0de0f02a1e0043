//! Codec - Conversion between a collection of records and its persisted
//! JSON document.
//!
//! The document is a single JSON array of objects, one object per record.
//! Polymorphic records carry their discriminator tag inside the object, so
//! decoding reconstructs the concrete variant.

use crate::error::StoreError;
use crate::record::Record;

/// Encode a collection as a pretty-printed JSON array document.
pub fn encode<R: Record>(records: &[R]) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec_pretty(records).map_err(|e| StoreError::Persistence {
        collection: R::COLLECTION,
        detail: e.to_string(),
    })
}

/// Decode a persisted document back into a collection.
///
/// Empty (or whitespace-only) input is an empty collection, not an error.
/// Anything else that does not parse as an array of the expected record
/// shape is a `MalformedDocument` error.
pub fn decode<R: Record>(bytes: &[u8]) -> Result<Vec<R>, StoreError> {
    let text = std::str::from_utf8(bytes).map_err(|e| StoreError::MalformedDocument {
        collection: R::COLLECTION,
        detail: e.to_string(),
    })?;

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(text).map_err(|e| StoreError::MalformedDocument {
        collection: R::COLLECTION,
        detail: e.to_string(),
    })
}
