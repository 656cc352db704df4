//! # Wire DTOs
//!
//! JSON shapes exchanged with the storefront API.
//!
//! ## Endpoints
//! ```text
//! GET  {base}/storeInfo  ──►  StoreDto
//! GET  {base}/products   ──►  ProductResponseDto
//!                              └── data.ProductResult
//!                                   ├── PaginationInfo {total_count, current_page, total_pages}
//!                                   └── Products [ProductDto]
//! POST {base}/order      ◄──  OrderRequestDto {products: [ProductDto], delivery_address}
//! ```
//!
//! Field names follow the server exactly, mixed casing included.

use serde::{Deserialize, Serialize};

/// A product as it travels over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    /// Server-side id. Not trusted on read; always sent on order submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub price: i64,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Store header information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDto {
    pub name: String,
    pub rating: f64,
    #[serde(rename = "openingTime")]
    pub opening_time: String,
    #[serde(rename = "closingTime")]
    pub closing_time: String,
}

/// Body of `POST /order`. One product entry per unit ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequestDto {
    pub products: Vec<ProductDto>,
    pub delivery_address: String,
}

// =============================================================================
// Products Envelope
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub total_count: u32,
    pub current_page: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductResult {
    #[serde(rename = "PaginationInfo")]
    pub pagination_info: PaginationInfo,
    #[serde(rename = "Products")]
    pub products: Vec<ProductDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    #[serde(rename = "ProductResult")]
    pub product_result: ProductResult,
}

/// Response of `GET /products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductResponseDto {
    pub data: ProductData,
}

impl ProductResponseDto {
    /// Wraps a single page of products.
    pub fn single_page(products: Vec<ProductDto>) -> Self {
        let total_count = u32::try_from(products.len()).unwrap_or(u32::MAX);
        ProductResponseDto {
            data: ProductData {
                product_result: ProductResult {
                    pagination_info: PaginationInfo {
                        total_count,
                        current_page: 1,
                        total_pages: 1,
                    },
                    products,
                },
            },
        }
    }

    /// Unwraps the product list.
    pub fn into_products(self) -> Vec<ProductDto> {
        self.data.product_result.products
    }
}
