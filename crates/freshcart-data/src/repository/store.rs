//! Store header repository.

use std::sync::Arc;

use freshcart_core::{AppResult, Store};
use freshcart_remote::{classify, StoreGateway};
use tracing::{debug, warn};

use crate::mapper::store_from_dto;

#[derive(Clone)]
pub struct StoreRepository {
    gateway: Arc<dyn StoreGateway>,
}

impl StoreRepository {
    pub fn new(gateway: Arc<dyn StoreGateway>) -> Self {
        StoreRepository { gateway }
    }

    /// Fetches the store header.
    pub async fn get_store_info(&self) -> AppResult<Store> {
        match self.gateway.fetch_store_info().await {
            Ok(dto) => {
                debug!(store = %dto.name, "Store info fetched");
                Ok(store_from_dto(dto))
            }
            Err(failure) => {
                let error = classify(failure);
                warn!(error = %error, "Failed to fetch store info");
                Err(error)
            }
        }
    }
}
