use async_trait::async_trait;
use parking_lot::Mutex;

use super::{CartBackend, StorageError};
use crate::cart::CartItem;

/// Process-lifetime store. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryBackend {
    items: Mutex<Vec<CartItem>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `items` already saved.
    pub fn with_items(items: Vec<CartItem>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }
}

#[async_trait]
impl CartBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn load(&self) -> Result<Vec<CartItem>, StorageError> {
        Ok(self.items.lock().clone())
    }

    async fn save(&self, items: &[CartItem]) -> Result<(), StorageError> {
        *self.items.lock() = items.to_vec();
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.items.lock().clear();
        Ok(())
    }
}
