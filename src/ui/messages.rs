//! Localized text for dialogs, notifications and the cart view.

use crate::config::Locale;
use crate::confirm::ConfirmRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Dialog asking to remove all `item_count` lines.
    pub fn clear_request(&self, item_count: usize) -> ConfirmRequest {
        match self.locale {
            Locale::Vi => ConfirmRequest {
                title: "Xác nhận xóa".to_string(),
                message: format!(
                    "Bạn có chắc muốn xóa tất cả {item_count} sản phẩm trong giỏ hàng?"
                ),
                cancel_label: "Hủy".to_string(),
                confirm_label: "Xóa tất cả".to_string(),
            },
            Locale::En => ConfirmRequest {
                title: "Confirm clear".to_string(),
                message: format!("Remove all {item_count} items from your cart?"),
                cancel_label: "Cancel".to_string(),
                confirm_label: "Clear all".to_string(),
            },
        }
    }

    /// (title, body) shown when the bulk clear fails.
    pub fn clear_failed(&self) -> (&'static str, &'static str) {
        match self.locale {
            Locale::Vi => ("Lỗi", "Không thể xóa giỏ hàng. Vui lòng thử lại."),
            Locale::En => ("Error", "Could not clear the cart. Please try again."),
        }
    }

    /// (title, body) for the checkout placeholder.
    pub fn checkout_unavailable(&self) -> (&'static str, &'static str) {
        match self.locale {
            Locale::Vi => ("Thông báo", "Chưa làm ạ!"),
            Locale::En => ("Notice", "Checkout is not available yet."),
        }
    }

    pub fn empty_cart(&self) -> &'static str {
        match self.locale {
            Locale::Vi => "Giỏ hàng hiện đang trống. Hãy thêm một vài loại cá tươi nhé!",
            Locale::En => "Your cart is empty. Add some fresh fish!",
        }
    }

    pub fn total_label(&self) -> &'static str {
        match self.locale {
            Locale::Vi => "Tổng cộng",
            Locale::En => "Total",
        }
    }

    /// Suffix after a unit price.
    pub fn per_unit(&self) -> &'static str {
        "/ kg"
    }

    pub fn cleared(&self, removed: usize) -> String {
        match self.locale {
            Locale::Vi => format!("Đã xóa {removed} sản phẩm."),
            Locale::En => format!("Removed {removed} items."),
        }
    }

    pub fn not_in_cart(&self, id: &str) -> String {
        match self.locale {
            Locale::Vi => format!("Không có sản phẩm '{id}' trong giỏ hàng."),
            Locale::En => format!("No item '{id}' in the cart."),
        }
    }
}
