//! # Repository Module
//!
//! One repository per aggregate, all sharing one gateway.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Contract                                  │
//! │                                                                         │
//! │  Use case                                                               │
//! │       │  repos.products().get_products()                               │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │       │  gateway.fetch_products()                                      │
//! │       ▼                                                                 │
//! │  Result<Vec<ProductDto>, Failure>                                      │
//! │       │  map(product_from_dto) / map_err(classify)                     │
//! │       ▼                                                                 │
//! │  AppResult<Vec<Product>>  ◄── never a raw transport failure            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`StoreRepository`] - Store header
//! - [`ProductRepository`] - Catalog
//! - [`OrderRepository`] - Order submission

pub mod order;
pub mod product;
pub mod store;

use std::sync::Arc;

use freshcart_remote::StoreGateway;

pub use order::OrderRepository;
pub use product::ProductRepository;
pub use store::StoreRepository;

/// All repositories over one gateway.
///
/// ## Usage
/// ```rust
/// use std::sync::Arc;
/// use freshcart_data::Repositories;
/// use freshcart_remote::MockGateway;
///
/// let repos = Repositories::new(Arc::new(MockGateway::instant()));
/// let products = repos.products();
/// ```
#[derive(Clone)]
pub struct Repositories {
    gateway: Arc<dyn StoreGateway>,
}

impl Repositories {
    pub fn new(gateway: Arc<dyn StoreGateway>) -> Self {
        Self { gateway }
    }

    pub fn stores(&self) -> StoreRepository {
        StoreRepository::new(self.gateway.clone())
    }

    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.gateway.clone())
    }

    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(self.gateway.clone())
    }
}
