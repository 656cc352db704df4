//! # Product Repository
//!
//! Catalog access. Every DTO maps to exactly one `Product`, in server order;
//! nothing is filtered or deduplicated here.

use std::sync::Arc;

use freshcart_core::{AppResult, Product};
use freshcart_remote::{classify, StoreGateway};
use tracing::{debug, warn};

use crate::mapper::product_from_dto;

/// Repository for the product catalog.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(gateway);
/// let products = repo.get_products().await?;
/// ```
#[derive(Clone)]
pub struct ProductRepository {
    gateway: Arc<dyn StoreGateway>,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(gateway: Arc<dyn StoreGateway>) -> Self {
        ProductRepository { gateway }
    }

    /// Fetches the catalog.
    pub async fn get_products(&self) -> AppResult<Vec<Product>> {
        let dtos = self.gateway.fetch_products().await.map_err(|failure| {
            let error = classify(failure);
            warn!(error = %error, "Failed to fetch products");
            error
        })?;

        debug!(count = dtos.len(), "Products fetched");
        Ok(dtos.into_iter().map(product_from_dto).collect())
    }
}
