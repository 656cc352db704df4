//! # Use Cases
//!
//! Thin operations between the session and the repositories.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Use case        Validation                    Repository call          │
//! │  ────────        ──────────                    ───────────────          │
//! │  GetStoreInfo    none                          stores().get_store_info  │
//! │  GetProducts     none                          products().get_products  │
//! │  PlaceOrder      cart non-empty,               orders().place_order     │
//! │                  address non-blank                                      │
//! │                  (before any network call)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod get_products;
mod get_store_info;
mod place_order;

pub use get_products::GetProducts;
pub use get_store_info::GetStoreInfo;
pub use place_order::PlaceOrder;

use freshcart_data::Repositories;

/// The use cases a session needs, built over one set of repositories.
#[derive(Clone)]
pub struct UseCases {
    pub get_store_info: GetStoreInfo,
    pub get_products: GetProducts,
    pub place_order: PlaceOrder,
}

impl UseCases {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            get_store_info: GetStoreInfo::new(repositories.stores()),
            get_products: GetProducts::new(repositories.products()),
            place_order: PlaceOrder::new(repositories.orders()),
        }
    }
}
