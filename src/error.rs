use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    MalformedDocument {
        collection: &'static str,
        detail: String,
    },
    Persistence {
        collection: &'static str,
        detail: String,
    },
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::MalformedDocument { collection, detail } => {
                write!(f, "malformed {} document: {}", collection, detail)
            }
            StoreError::Persistence { collection, detail } => {
                write!(f, "failed to persist {} document: {}", collection, detail)
            }
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}
