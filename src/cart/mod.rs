//! Cart state container.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent):
//! - `state.rs` - ordered lines with derived totals
//! - `intent.rs` - add / remove / clear / restore actions
//! - `reducer.rs` - pure transitions that keep the invariants
//! - `store.rs` - shared handle that serializes mutations and talks to
//!   the backing store

mod intent;
mod item;
mod reducer;
mod state;
mod store;

use thiserror::Error;

use crate::storage::StorageError;

pub use intent::CartIntent;
pub use item::{CartItem, ItemSpec};
pub use reducer::CartReducer;
pub use state::CartState;
pub use store::{CartStore, CheckoutOutcome, RemoveOutcome};

/// Errors surfaced by [`CartStore`] operations that touch the backing store.
#[derive(Debug, Error)]
pub enum CartError {
    /// The backing store refused the bulk clear. Cart contents are unchanged.
    #[error("Failed to clear cart: {source}")]
    ClearFailed {
        #[source]
        source: StorageError,
    },

    /// Restore or flush failed.
    #[error("Cart storage error: {0}")]
    Storage(#[from] StorageError),
}
