use serde::{Deserialize, Serialize};

/// What the presentation layer hands to `add_to_cart`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub id: String,
    pub name: String,
    /// Unit price in the currency's smallest unit.
    pub price_value: u64,
}

impl ItemSpec {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_value: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_value,
        }
    }
}

/// One line of the cart.
///
/// A stored item always has `quantity >= 1`; the last decrement removes
/// the line instead of leaving a zero entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

impl CartItem {
    pub(crate) fn from_spec(spec: ItemSpec) -> Self {
        Self {
            id: spec.id,
            name: spec.name,
            price: spec.price_value,
            quantity: 1,
        }
    }

    /// `price * quantity`, widened so it cannot overflow.
    pub fn line_total(&self) -> u128 {
        u128::from(self.price) * u128::from(self.quantity)
    }

    /// The spec that re-adds one more unit of this line (the "+" control).
    pub fn spec(&self) -> ItemSpec {
        ItemSpec::new(self.id.clone(), self.name.clone(), self.price)
    }
}
