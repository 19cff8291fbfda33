use std::collections::HashSet;

use super::intent::CartIntent;
use super::item::CartItem;
use super::state::CartState;
use crate::ui::mvi::Reducer;

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CartIntent::Add(spec) => {
                match state.position(&spec.id) {
                    // Stored name and price stay authoritative.
                    Some(idx) => {
                        let item = &mut state.items[idx];
                        item.quantity = item.quantity.saturating_add(1);
                    }
                    None => state.items.push(CartItem::from_spec(spec)),
                }
                state
            }
            CartIntent::RemoveOne { id } => {
                if let Some(idx) = state.position(&id) {
                    if state.items[idx].quantity > 1 {
                        state.items[idx].quantity -= 1;
                    } else {
                        state.items.remove(idx);
                    }
                }
                state
            }
            CartIntent::RemoveItem { id } => {
                state.items.retain(|item| item.id != id);
                state
            }
            CartIntent::Clear => CartState::default(),
            CartIntent::Restore { items } => {
                let mut seen = HashSet::new();
                let items = items
                    .into_iter()
                    .filter(|item| item.quantity > 0 && seen.insert(item.id.clone()))
                    .collect();
                CartState { items }
            }
        }
    }
}
