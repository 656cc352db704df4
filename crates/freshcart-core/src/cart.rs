//! # Cart
//!
//! The shopping cart and its quantity accounting.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action              Cart method          Effect                     │
//! │  ─────────              ───────────          ──────                     │
//! │                                                                         │
//! │  Tap "+" ─────────────► add() ─────────────► qty + 1 (or append qty 1)  │
//! │                                                                         │
//! │  Tap "-" ─────────────► remove_one() ──────► qty - 1 (drop line at 1)   │
//! │                                                                         │
//! │  Swipe away ──────────► remove_all() ──────► drop line                  │
//! │                                                                         │
//! │  Order placed ────────► clear() ───────────► empty                      │
//! │                                                                         │
//! │  Badge on card ───────► quantity() ────────► (read only)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

/// One cart line: a product and how many units of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Creates a cart line.
    pub fn new(product: Product, quantity: u32) -> Self {
        CartItem { product, quantity }
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn total_price(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per product name (adding the same product bumps quantity)
/// - Every line has quantity >= 1; a line that would reach 0 is removed
/// - Existing lines keep their order; new lines are appended
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Cart lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Adds one unit of `product`.
    pub fn add(&mut self, product: &Product) {
        match self.position(product) {
            Some(index) => self.items[index].quantity += 1,
            None => self.items.push(CartItem::new(product.clone(), 1)),
        }
    }

    /// Removes one unit of `product`; drops the line when its last unit goes.
    ///
    /// Returns `false` if the product was not in the cart.
    pub fn remove_one(&mut self, product: &Product) -> bool {
        let Some(index) = self.position(product) else {
            return false;
        };

        if self.items[index].quantity > 1 {
            self.items[index].quantity -= 1;
        } else {
            self.items.remove(index);
        }
        true
    }

    /// Drops the line for `product` regardless of its quantity.
    ///
    /// Returns `false` if the product was not in the cart.
    pub fn remove_all(&mut self, product: &Product) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|item| !item.product.same_product(product));
        self.items.len() != initial_len
    }

    /// Units of `product` in the cart, 0 when absent.
    pub fn quantity(&self, product: &Product) -> u32 {
        self.position(product)
            .map(|index| self.items[index].quantity)
            .unwrap_or(0)
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of every line's total price.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartItem::total_price).sum()
    }

    fn position(&self, product: &Product) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product.same_product(product))
    }
}

impl From<Vec<CartItem>> for Cart {
    /// Builds a cart from lines, merging duplicates and dropping empty lines.
    fn from(lines: Vec<CartItem>) -> Self {
        let mut cart = Cart::new();
        for line in lines.into_iter().filter(|line| line.quantity > 0) {
            match cart.position(&line.product) {
                Some(index) => cart.items[index].quantity += line.quantity,
                None => cart.items.push(line),
            }
        }
        cart
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(name: &str, price: i64) -> Product {
        Product::new(name, Money::from_units(price), "https://img/test.png")
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let apple = test_product("Apple", 5);

        cart.add(&apple);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity(&apple), 1);
        assert_eq!(cart.total_price(), Money::from_units(5));
    }

    #[test]
    fn test_cart_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        let apple = test_product("Apple", 5);

        cart.add(&apple);
        cart.add(&apple);
        cart.add(&apple);

        assert_eq!(cart.line_count(), 1); // Still one line
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_cart_matches_lines_by_name() {
        let mut cart = Cart::new();
        cart.add(&test_product("Apple", 5));
        // Same name, different price: same line
        cart.add(&test_product("Apple", 6));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity(&test_product("Apple", 0)), 2);
    }

    #[test]
    fn test_cart_preserves_insertion_order() {
        let mut cart = Cart::new();
        let apple = test_product("Apple", 5);
        let bread = test_product("Bread", 4);
        let milk = test_product("Milk", 5);

        cart.add(&apple);
        cart.add(&bread);
        cart.add(&apple);
        cart.add(&milk);

        let names: Vec<&str> = cart.items().iter().map(|i| i.product.name.as_str()).collect();
        assert_eq!(names, ["Apple", "Bread", "Milk"]);
    }

    #[test]
    fn test_remove_one_decrements_then_drops_line() {
        let mut cart = Cart::new();
        let apple = test_product("Apple", 5);
        cart.add(&apple);
        cart.add(&apple);

        assert!(cart.remove_one(&apple));
        assert_eq!(cart.quantity(&apple), 1);

        assert!(cart.remove_one(&apple));
        assert_eq!(cart.quantity(&apple), 0);
        assert!(cart.is_empty());

        assert!(!cart.remove_one(&apple));
    }

    #[test]
    fn test_add_remove_sequences_never_leave_zero_lines() {
        let apple = test_product("Apple", 5);

        for adds in 0..6u32 {
            for removes in 0..8u32 {
                let mut cart = Cart::new();
                for _ in 0..adds {
                    cart.add(&apple);
                }
                for _ in 0..removes {
                    cart.remove_one(&apple);
                }

                let expected = adds.saturating_sub(removes);
                assert_eq!(cart.quantity(&apple), expected, "adds={adds} removes={removes}");
                assert_eq!(cart.is_empty(), expected == 0);
                assert!(cart.items().iter().all(|item| item.quantity > 0));
            }
        }
    }

    #[test]
    fn test_remove_all_ignores_quantity() {
        let mut cart = Cart::new();
        let apple = test_product("Apple", 5);
        let bread = test_product("Bread", 4);
        for _ in 0..7 {
            cart.add(&apple);
        }
        cart.add(&bread);

        assert!(cart.remove_all(&apple));
        assert_eq!(cart.quantity(&apple), 0);
        assert_eq!(cart.quantity(&bread), 1);
        assert!(!cart.remove_all(&apple));
    }

    #[test]
    fn test_cart_totals_scenario() {
        let mut cart = Cart::new();
        let apple = test_product("Apple", 5);
        let bread = test_product("Bread", 4);
        cart.add(&apple);
        cart.add(&apple);
        cart.add(&bread);

        assert_eq!(cart.total_price(), Money::from_units(14));
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add(&test_product("Apple", 5));
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Money::zero());
    }

    #[test]
    fn test_from_lines_merges_and_drops_empty() {
        let apple = test_product("Apple", 5);
        let cart = Cart::from(vec![
            CartItem::new(apple.clone(), 2),
            CartItem::new(test_product("Bread", 4), 0),
            CartItem::new(apple.clone(), 1),
        ]);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity(&apple), 3);
    }

    #[test]
    fn test_deserialize_merges_and_drops_empty() {
        let apple = test_product("Apple", 5);
        let lines = vec![
            CartItem::new(apple.clone(), 2),
            CartItem::new(test_product("Bread", 4), 0),
            CartItem::new(apple.clone(), 1),
        ];
        let json = serde_json::to_string(&lines).unwrap();

        let cart: Cart = serde_json::from_str(&json).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity(&apple), 3);
        assert_eq!(
            serde_json::to_value(&cart).unwrap(),
            serde_json::to_value(cart.items()).unwrap()
        );
    }
}
