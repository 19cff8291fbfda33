//! Backing stores behind the cart.
//!
//! The cart itself lives in memory; a backend only sees whole snapshots
//! (`save`), the session-start read (`load`) and the bulk clear.

mod file;
mod memory;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::cart::CartItem;

pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Errors raised by a backing store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode or decode cart: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Async persistence seam for [`CartStore`](crate::cart::CartStore).
#[async_trait]
pub trait CartBackend: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Read the persisted lines. A store with nothing saved returns an empty list.
    async fn load(&self) -> Result<Vec<CartItem>, StorageError>;

    /// Replace the persisted lines with `items`.
    async fn save(&self, items: &[CartItem]) -> Result<(), StorageError>;

    /// Drop everything persisted. Must be idempotent.
    async fn clear(&self) -> Result<(), StorageError>;
}
