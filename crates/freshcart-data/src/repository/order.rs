//! # Order Repository
//!
//! Submits orders. The domain order is expanded to one wire entry per unit
//! before it leaves the process (see [`crate::mapper::order_to_request`]).

use std::sync::Arc;

use freshcart_core::{AppResult, Order};
use freshcart_remote::{classify, StoreGateway};
use tracing::{info, warn};

use crate::mapper::order_to_request;

#[derive(Clone)]
pub struct OrderRepository {
    gateway: Arc<dyn StoreGateway>,
}

impl OrderRepository {
    pub fn new(gateway: Arc<dyn StoreGateway>) -> Self {
        OrderRepository { gateway }
    }

    /// Submits `order`. `Ok(false)` means the server declined without an error.
    pub async fn place_order(&self, order: &Order) -> AppResult<bool> {
        let request = order_to_request(order);
        info!(
            lines = order.items.len(),
            units = request.products.len(),
            total = %order.total_amount(),
            "Submitting order"
        );

        match self.gateway.submit_order(&request).await {
            Ok(accepted) => {
                info!(accepted, "Order submission finished");
                Ok(accepted)
            }
            Err(failure) => {
                let error = classify(failure);
                warn!(error = %error, "Order submission failed");
                Err(error)
            }
        }
    }
}
