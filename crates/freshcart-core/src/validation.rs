//! # Validation Module
//!
//! Order placement rules, checked before anything goes over the wire.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                  │
//! │  └── Disables the "Place order" button while the cart is empty         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: PlaceOrder use case                                          │
//! │  └── THIS MODULE: non-empty cart, non-blank address                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Remote API                                                   │
//! │  └── Rejects with HTTP 4xx                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use freshcart_core::validation::validate_order_input;
//! use freshcart_core::ValidationError;
//!
//! assert_eq!(validate_order_input(&[], "12 Market St"), Err(ValidationError::EmptyCart));
//! ```

use crate::cart::CartItem;
use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a delivery address.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_delivery_address(address: &str) -> ValidationResult<()> {
    if address.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "Delivery address".to_string(),
        });
    }
    Ok(())
}

/// Validates cart lines for an order.
///
/// ## Rules
/// - At least one line
pub fn validate_cart_items(items: &[CartItem]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::EmptyCart);
    }
    Ok(())
}

/// Validates everything PlaceOrder needs. The cart is checked first.
pub fn validate_order_input(items: &[CartItem], address: &str) -> ValidationResult<()> {
    validate_cart_items(items)?;
    validate_delivery_address(address)
}
