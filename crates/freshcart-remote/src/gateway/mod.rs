//! # Store Gateway
//!
//! The three remote operations the storefront needs, behind one trait.
//!
//! ## Implementations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        StoreGateway                                     │
//! │                                                                         │
//! │   fetch_store_info() ──► StoreDto                                      │
//! │   fetch_products()   ──► Vec<ProductDto>                               │
//! │   submit_order(req)  ──► bool                                          │
//! │                                                                         │
//! │   ┌──────────────┐   ┌──────────────┐   ┌───────────────────────────┐  │
//! │   │ HttpGateway  │   │ MockGateway  │   │ FakeGateway (test-util)   │  │
//! │   │ reqwest      │   │ fixed        │   │ scripted responses,       │  │
//! │   │              │   │ catalog      │   │ call counters, gates      │  │
//! │   └──────────────┘   └──────────────┘   └───────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only a 2xx response produces a value. Everything else is a [`Failure`]
//! for [`crate::classify`] to deal with.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::ApiConfig;
use crate::dto::{OrderRequestDto, ProductDto, StoreDto};
use crate::error::{ConfigResult, RemoteResult};

#[cfg(any(test, feature = "test-util"))]
mod fake;
mod http;
mod mock;

#[cfg(any(test, feature = "test-util"))]
pub use fake::FakeGateway;
pub use http::HttpGateway;
pub use mock::{mock_catalog, mock_store, MockGateway};

/// Remote operations of the storefront API.
#[async_trait]
pub trait StoreGateway: Send + Sync {
    /// `GET {base}/storeInfo`
    async fn fetch_store_info(&self) -> RemoteResult<StoreDto>;

    /// `GET {base}/products`
    async fn fetch_products(&self) -> RemoteResult<Vec<ProductDto>>;

    /// `POST {base}/order`. `Ok(true)` means accepted.
    async fn submit_order(&self, request: &OrderRequestDto) -> RemoteResult<bool>;
}

/// Builds the gateway `config` asks for.
pub fn build_gateway(config: &ApiConfig) -> ConfigResult<Arc<dyn StoreGateway>> {
    if config.use_mock {
        info!(latency = config.mock_latency, "Using mock storefront gateway");
        Ok(Arc::new(MockGateway::from_config(config)))
    } else {
        info!(base_url = %config.base_url(), "Using HTTP storefront gateway");
        Ok(Arc::new(HttpGateway::new(config)?))
    }
}
