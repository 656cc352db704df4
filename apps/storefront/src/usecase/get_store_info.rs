use freshcart_core::{AppResult, Store};
use freshcart_data::StoreRepository;

/// Fetches the store header.
#[derive(Clone)]
pub struct GetStoreInfo {
    repository: StoreRepository,
}

impl GetStoreInfo {
    pub fn new(repository: StoreRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> AppResult<Store> {
        self.repository.get_store_info().await
    }
}
