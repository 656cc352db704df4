use freshcart_core::{AppResult, Product};
use freshcart_data::ProductRepository;

/// Fetches the catalog.
#[derive(Clone)]
pub struct GetProducts {
    repository: ProductRepository,
}

impl GetProducts {
    pub fn new(repository: ProductRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> AppResult<Vec<Product>> {
        self.repository.get_products().await
    }
}
