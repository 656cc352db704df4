//! The immutable state the UI renders.

use freshcart_core::{Cart, CartItem, LastOrderInfo, Money, Product, Store};
use serde::Serialize;
use ts_rs::TS;

/// Everything the store, cart and order screens show, at one instant.
///
/// ## Derived values
/// `total_cart_items` and `total_price` are computed from `cart` on every
/// call and never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StoreSnapshot {
    /// A load or refresh is in progress.
    pub is_loading: bool,

    pub store: Option<Store>,
    pub products: Vec<Product>,

    /// Serialized as the bare list of lines.
    #[ts(as = "Vec<CartItem>")]
    pub cart: Cart,

    /// Load failure shown on the store screen.
    pub error_message: Option<String>,

    pub delivery_address: String,

    /// An order submission is in flight; gates further submissions.
    pub is_placing_order: bool,

    /// Order failure shown inline on the order summary.
    pub order_error_message: Option<String>,

    /// Summary of the most recent accepted order.
    pub last_order_info: Option<LastOrderInfo>,
}

impl StoreSnapshot {
    pub fn cart_items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Units across all cart lines.
    pub fn total_cart_items(&self) -> u32 {
        self.cart.total_quantity()
    }

    /// Σ price × quantity over the cart.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }
}
