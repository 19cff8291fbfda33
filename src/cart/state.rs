use super::item::CartItem;
use crate::ui::mvi::UiState;

/// Ordered, id-unique list of cart lines.
///
/// The total is never stored; every read sums the current lines, so it
/// cannot drift from `items`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartState {
    pub(super) items: Vec<CartItem>,
}

impl UiState for CartState {}

impl CartState {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(super) fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Σ `price * quantity` over all lines.
    ///
    /// Accumulated in `u128`: a `u64` price times a `u32` quantity needs at
    /// most 96 bits, leaving room for 2^32 lines.
    pub fn total_price(&self) -> u128 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
