//! # DTO Mappers
//!
//! Conversions between wire DTOs and domain types.
//!
//! ## Order Expansion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The order endpoint has no quantity field. Each unit becomes one entry: │
//! │                                                                         │
//! │  Order                               OrderRequestDto.products           │
//! │  ─────                               ────────────────────────           │
//! │  Apple  × 2  ──────────────────────► [Apple, Apple,                     │
//! │  Bread  × 1  ──────────────────────►  Bread]                            │
//! │                                                                         │
//! │  Line order is kept; copies of one line are adjacent.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::iter;

use freshcart_core::{Money, Order, Product, Store};
use freshcart_remote::{OrderRequestDto, ProductDto, StoreDto};

/// Wire product → domain product. The server id is dropped.
pub fn product_from_dto(dto: ProductDto) -> Product {
    Product::new(dto.name, Money::from_units(dto.price), dto.image_url)
}

/// Domain product → wire product, carrying the derived id.
pub fn product_to_dto(product: &Product) -> ProductDto {
    ProductDto {
        id: Some(product.id()),
        name: product.name.clone(),
        price: product.price.units(),
        image_url: product.image_url.clone(),
    }
}

pub fn store_from_dto(dto: StoreDto) -> Store {
    Store {
        name: dto.name,
        rating: dto.rating,
        opening_time: dto.opening_time,
        closing_time: dto.closing_time,
    }
}

/// Domain order → `POST /order` body, one product entry per unit.
pub fn order_to_request(order: &Order) -> OrderRequestDto {
    let products = order
        .items
        .iter()
        .flat_map(|item| {
            let wire = product_to_dto(&item.product);
            iter::repeat(wire).take(item.quantity as usize)
        })
        .collect();

    OrderRequestDto {
        products,
        delivery_address: order.delivery_address.clone(),
    }
}
