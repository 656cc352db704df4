//! # Place Order
//!
//! Validates, then submits.
//!
//! ```text
//! execute(items, address)
//!     │
//!     ├── items empty?        ──► Err(Validation(EmptyCart))      no network
//!     ├── address blank?      ──► Err(Validation(Required))       no network
//!     │
//!     └── orders().place_order(Order)
//!             ├── Ok(true)    accepted
//!             ├── Ok(false)   declined
//!             └── Err(e)      ──► Err(Remote(e))
//! ```

use freshcart_core::validation::validate_order_input;
use freshcart_core::{CartItem, Order, OrderError};
use freshcart_data::OrderRepository;
use tracing::debug;

#[derive(Clone)]
pub struct PlaceOrder {
    repository: OrderRepository,
}

impl PlaceOrder {
    pub fn new(repository: OrderRepository) -> Self {
        Self { repository }
    }

    /// Places an order for `items`, delivered to `delivery_address`.
    pub async fn execute(
        &self,
        items: Vec<CartItem>,
        delivery_address: &str,
    ) -> Result<bool, OrderError> {
        if let Err(err) = validate_order_input(&items, delivery_address) {
            debug!(error = %err, "Order rejected before submission");
            return Err(err.into());
        }

        let order = Order::new(items, delivery_address);
        Ok(self.repository.place_order(&order).await?)
    }
}
