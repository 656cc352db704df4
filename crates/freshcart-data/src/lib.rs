//! # freshcart-data: Repository Layer for FreshCart
//!
//! Stateless adapters between the gateway's DTOs and the domain model.
//! Every repository method returns an [`freshcart_core::AppResult`]; gateway
//! failures are classified exactly once, here, on their way up.
//!
//! ## Module Organization
//!
//! - [`mapper`] - DTO <-> domain conversions, order expansion
//! - [`repository`] - Store, product and order repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use freshcart_data::Repositories;
//!
//! let repos = Repositories::new(gateway);
//! let store = repos.stores().get_store_info().await?;
//! let products = repos.products().get_products().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod mapper;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use repository::{OrderRepository, ProductRepository, Repositories, StoreRepository};
