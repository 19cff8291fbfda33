use super::item::{CartItem, ItemSpec};
use crate::ui::mvi::Intent;

/// Mutations accepted by [`CartReducer`](super::CartReducer).
#[derive(Debug, Clone)]
pub enum CartIntent {
    /// Append a new line, or bump the quantity of an existing one.
    Add(ItemSpec),
    /// Take one unit off; the last unit drops the line.
    RemoveOne { id: String },
    /// Drop the line whatever its quantity.
    RemoveItem { id: String },
    /// Empty the cart. Dispatched only after the backing store cleared.
    Clear,
    /// Replace contents with lines loaded from the backing store.
    Restore { items: Vec<CartItem> },
}

impl Intent for CartIntent {}
