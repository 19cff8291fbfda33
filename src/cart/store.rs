use std::sync::Arc;

use parking_lot::Mutex;

use super::intent::CartIntent;
use super::item::{CartItem, ItemSpec};
use super::reducer::CartReducer;
use super::state::CartState;
use super::CartError;
use crate::storage::{CartBackend, MemoryBackend};
use crate::ui::mvi::dispatch;

/// Result of a single-line removal. `NotFound` is a no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// One unit removed, `remaining` units left on the line.
    Decremented { remaining: u32 },
    /// The whole line is gone.
    Removed,
    NotFound,
}

/// Checkout is a placeholder: it reports the total and changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    NotImplemented { total_price: u128 },
}

/// Session-owned cart handle.
///
/// Clones share one state. Every mutation is a read-modify-write under a
/// single lock, so rapid sequential calls never interleave. The lock is
/// never held across an `.await`.
#[derive(Clone)]
pub struct CartStore {
    state: Arc<Mutex<CartState>>,
    backend: Arc<dyn CartBackend>,
}

impl CartStore {
    pub fn new(backend: Arc<dyn CartBackend>) -> Self {
        Self {
            state: Arc::new(Mutex::new(CartState::default())),
            backend,
        }
    }

    /// Store backed by a [`MemoryBackend`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Consistent copy of the current state.
    pub fn snapshot(&self) -> CartState {
        self.state.lock().clone()
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.state.lock().items().to_vec()
    }

    pub fn total_price(&self) -> u128 {
        self.state.lock().total_price()
    }

    pub fn item_count(&self) -> usize {
        self.state.lock().item_count()
    }

    pub fn unit_count(&self) -> u64 {
        self.state.lock().unit_count()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().is_empty()
    }

    /// Add one unit. An existing line keeps its stored name and price.
    pub fn add_to_cart(&self, spec: ItemSpec) {
        let mut state = self.state.lock();

        if let Some(existing) = state.get(&spec.id) {
            if existing.price != spec.price_value || existing.name != spec.name {
                tracing::warn!(
                    id = %spec.id,
                    stored_price = existing.price,
                    supplied_price = spec.price_value,
                    "Re-added item with diverging listing, keeping stored values"
                );
            }
        }

        let id = spec.id.clone();
        dispatch::<CartReducer>(&mut *state, CartIntent::Add(spec));
        tracing::debug!(
            id = %id,
            quantity = state.get(&id).map(|item| item.quantity).unwrap_or(0),
            total = %state.total_price(),
            "Item added"
        );
    }

    /// Remove one unit; the last unit removes the line.
    pub fn remove_one(&self, id: &str) -> RemoveOutcome {
        let mut state = self.state.lock();
        let outcome = match state.get(id) {
            None => RemoveOutcome::NotFound,
            Some(item) if item.quantity > 1 => RemoveOutcome::Decremented {
                remaining: item.quantity - 1,
            },
            Some(_) => RemoveOutcome::Removed,
        };

        if outcome != RemoveOutcome::NotFound {
            dispatch::<CartReducer>(&mut *state, CartIntent::RemoveOne { id: id.to_string() });
        }
        tracing::debug!(id, ?outcome, total = %state.total_price(), "Remove one");
        outcome
    }

    /// Remove the whole line regardless of quantity.
    pub fn remove_item_completely(&self, id: &str) -> RemoveOutcome {
        let mut state = self.state.lock();
        if state.get(id).is_none() {
            tracing::debug!(id, "Remove item: not in cart");
            return RemoveOutcome::NotFound;
        }
        dispatch::<CartReducer>(&mut *state, CartIntent::RemoveItem { id: id.to_string() });
        tracing::debug!(id, total = %state.total_price(), "Item removed");
        RemoveOutcome::Removed
    }

    /// Bulk clear through the backing store.
    ///
    /// Returns the number of lines dropped. On an empty cart this is a
    /// no-op returning `Ok(0)`. If the backend fails, the in-memory cart
    /// is left untouched. Once the backend succeeds the cart is emptied
    /// outright, including lines added while the clear was pending.
    pub async fn clear_cart(&self) -> Result<usize, CartError> {
        if self.is_empty() {
            tracing::debug!("Clear requested on empty cart");
            return Ok(0);
        }

        self.backend
            .clear()
            .await
            .map_err(|source| CartError::ClearFailed { source })?;

        let mut state = self.state.lock();
        let removed = state.item_count();
        dispatch::<CartReducer>(&mut *state, CartIntent::Clear);
        tracing::info!(removed, backend = self.backend.name(), "Cart cleared");
        Ok(removed)
    }

    /// Replace the in-memory cart with what the backend has saved.
    ///
    /// Zero-quantity rows and repeated ids are dropped. Returns the number
    /// of lines restored.
    pub async fn restore(&self) -> Result<usize, CartError> {
        let items = self.backend.load().await?;
        let mut state = self.state.lock();
        dispatch::<CartReducer>(&mut *state, CartIntent::Restore { items });
        let restored = state.item_count();
        tracing::info!(restored, backend = self.backend.name(), "Cart restored");
        Ok(restored)
    }

    /// Persist the current lines.
    pub async fn flush(&self) -> Result<(), CartError> {
        let items = self.items();
        self.backend.save(&items).await?;
        tracing::trace!(lines = items.len(), "Cart flushed");
        Ok(())
    }

    /// Payment is not wired up; report the total and leave the cart as is.
    pub fn checkout(&self) -> CheckoutOutcome {
        let total_price = self.total_price();
        tracing::info!(%total_price, "Checkout requested but not available");
        CheckoutOutcome::NotImplemented { total_price }
    }
}
