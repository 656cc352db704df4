//! # Domain Types
//!
//! Core domain types used throughout FreshCart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │     Store       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (derived)   │   │  items[]        │   │  name           │       │
//! │  │  name           │   │  delivery_addr  │   │  rating         │       │
//! │  │  price          │   │  total_amount() │   │  opening_time   │       │
//! │  │  image_url      │   └─────────────────┘   │  closing_time   │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌──────────────────────────┐                                          │
//! │  │     LastOrderInfo        │  snapshot taken when an order succeeds   │
//! │  │  item_count, total,      │                                          │
//! │  │  address, placed_at      │                                          │
//! │  └──────────────────────────┘                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Product Identity
//! A product's identity is its **name**. The `id` is derived from the name
//! with a stable hash, so two products with the same name are the same
//! product as far as the cart and order are concerned. Ids sent by the
//! server are not trusted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartItem;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the store catalog. Immutable value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Display name, also the product's identity.
    pub name: String,

    /// Unit price in whole currency units.
    pub price: Money,

    /// Image shown on the product card.
    pub image_url: String,
}

impl Product {
    /// Creates a product.
    pub fn new(name: impl Into<String>, price: Money, image_url: impl Into<String>) -> Self {
        Product {
            name: name.into(),
            price,
            image_url: image_url.into(),
        }
    }

    /// Stable identifier derived from the product name.
    ///
    /// ## Example
    /// ```rust
    /// use freshcart_core::{Money, Product};
    ///
    /// let a = Product::new("Tomatoes", Money::from_units(6), "a.png");
    /// let b = Product::new("Tomatoes", Money::from_units(7), "b.png");
    /// assert_eq!(a.id(), b.id());
    /// ```
    pub fn id(&self) -> String {
        stable_name_hash(&self.name).to_string()
    }

    /// Returns true if `other` is the same catalog product (same name).
    #[inline]
    pub fn same_product(&self, other: &Product) -> bool {
        self.name == other.name
    }
}

/// 32-bit polynomial hash (multiplier 31) over the UTF-16 code units of
/// `name`, with wrapping arithmetic. Deterministic across runs and platforms.
pub fn stable_name_hash(name: &str) -> i32 {
    name.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

// =============================================================================
// Store
// =============================================================================

/// Store information shown in the header of the store screen.
///
/// Fetched once per session and replaced wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Store {
    pub name: String,
    pub rating: f64,
    pub opening_time: String,
    pub closing_time: String,
}

// =============================================================================
// Order
// =============================================================================

/// An order about to be submitted.
///
/// ## Invariants (enforced by the PlaceOrder use case, not here)
/// - `items` is non-empty
/// - `delivery_address` is not blank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    pub items: Vec<CartItem>,
    pub delivery_address: String,
}

impl Order {
    /// Creates an order from cart lines and a delivery address.
    pub fn new(items: Vec<CartItem>, delivery_address: impl Into<String>) -> Self {
        Order {
            items,
            delivery_address: delivery_address.into(),
        }
    }

    /// Sum of every line's total price.
    pub fn total_amount(&self) -> Money {
        self.items.iter().map(CartItem::total_price).sum()
    }

    /// Sum of every line's quantity.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

// =============================================================================
// Last Order Info
// =============================================================================

/// Summary captured the moment an order succeeds, for the confirmation view.
///
/// Overwritten by the next successful order; never cleared within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LastOrderInfo {
    /// Total number of units ordered.
    pub item_count: u32,

    /// Total amount charged.
    pub total_amount: Money,

    /// Where the order is delivered.
    pub delivery_address: String,

    /// When the order was accepted.
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

impl LastOrderInfo {
    /// Captures the summary of an accepted order.
    pub fn capture(order: &Order, placed_at: DateTime<Utc>) -> Self {
        LastOrderInfo {
            item_count: order.total_quantity(),
            total_amount: order.total_amount(),
            delivery_address: order.delivery_address.clone(),
            placed_at,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
