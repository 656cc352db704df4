//! # FreshCart Storefront
//!
//! The session core the presentation layer talks to.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (out of tree)                      │   │
//! │  │   renders StoreSnapshot, calls session operations               │   │
//! │  └───────────────────────────┬─────────────────────────────────────┘   │
//! │                              │                                          │
//! │  ┌───────────────────────────▼─────────────────────────────────────┐   │
//! │  │                  freshcart-storefront (THIS CRATE)               │   │
//! │  │                                                                  │   │
//! │  │   ┌────────────────────┐      ┌────────────────────────────┐    │   │
//! │  │   │ state              │      │ usecase                    │    │   │
//! │  │   │ StoreSession       │─────►│ GetStoreInfo, GetProducts, │    │   │
//! │  │   │ StoreSnapshot      │      │ PlaceOrder                 │    │   │
//! │  │   └────────────────────┘      └─────────────┬──────────────┘    │   │
//! │  └─────────────────────────────────────────────┼────────────────────┘   │
//! │                                                ▼                        │
//! │                     freshcart-data ──► freshcart-remote                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use freshcart_remote::{build_gateway, ApiConfig};
//! use freshcart_storefront::StoreSession;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let gateway = build_gateway(&ApiConfig::mock())?;
//! let session = StoreSession::new(gateway);
//! session.load().await;
//!
//! let snapshot = session.snapshot();
//! if let Some(first) = snapshot.products.first() {
//!     session.add_to_cart(first);
//! }
//! # Ok(())
//! # }
//! ```

pub mod state;
pub mod usecase;

pub use state::{PlaceOrderOutcome, StoreSession, StoreSnapshot, ORDER_REJECTED_MESSAGE};
pub use usecase::{GetProducts, GetStoreInfo, PlaceOrder, UseCases};

use tracing_subscriber::EnvFilter;

/// Initializes tracing. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,freshcart=debug,reqwest=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
