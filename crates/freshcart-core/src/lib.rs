//! # freshcart-core: Pure Domain Logic for FreshCart
//!
//! This crate is the **heart** of FreshCart. It contains the storefront
//! domain model and business rules as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FreshCart Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation layer (out of tree)                │   │
//! │  │    Store screen ──► Cart ──► Order summary ──► Success         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshot + operations                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          StoreSession + use cases (apps/storefront)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ freshcart-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  order    │  │   │
//! │  │   │  Order    │  │           │  │ CartItem  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │       freshcart-remote / freshcart-data (gateway, repos)        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Store, Order, LastOrderInfo)
//! - [`cart`] - Cart and CartItem with quantity accounting
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - AppError taxonomy, validation and order errors
//! - [`validation`] - Order placement rules
//!
//! ## Example Usage
//!
//! ```rust
//! use freshcart_core::{Cart, Money, Product};
//!
//! let apple = Product::new("Apple", Money::from_units(5), "https://img/apple.png");
//! let bread = Product::new("Bread", Money::from_units(4), "https://img/bread.png");
//!
//! let mut cart = Cart::new();
//! cart.add(&apple);
//! cart.add(&apple);
//! cart.add(&bread);
//!
//! assert_eq!(cart.total_quantity(), 3);
//! assert_eq!(cart.total_price(), Money::from_units(14));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use freshcart_core::Money` instead of
// `use freshcart_core::money::Money`

pub use cart::{Cart, CartItem};
pub use error::{AppError, AppResult, OrderError, ValidationError};
pub use money::Money;
pub use types::*;
