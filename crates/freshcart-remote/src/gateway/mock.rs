//! In-memory stand-in for the storefront API.
//!
//! Serves a fixed catalog so demos keep working once the shared sandbox
//! starts answering 429. Every order is accepted.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use super::StoreGateway;
use crate::config::ApiConfig;
use crate::dto::{OrderRequestDto, ProductDto, StoreDto};
use crate::error::RemoteResult;

const STORE_INFO_LATENCY: Duration = Duration::from_millis(500);
const PRODUCTS_LATENCY: Duration = Duration::from_millis(800);
const ORDER_LATENCY: Duration = Duration::from_millis(1000);

/// Accepted orders kept for inspection; older ones are dropped.
pub const SUBMITTED_ORDER_HISTORY: usize = 50;

const MOCK_IMAGE_URL: &str = "https://picsum.photos/seed/picsum/200/300";

const CATALOG: [(&str, i64); 12] = [
    ("Fresh Apples", 5),
    ("Organic Bananas", 3),
    ("Fresh Oranges", 4),
    ("Tomatoes", 6),
    ("Broccoli", 4),
    ("Carrots", 3),
    ("Fresh Bread", 4),
    ("Organic Milk", 5),
    ("Free Range Eggs", 6),
    ("Greek Yogurt", 4),
    ("Strawberries", 7),
    ("Avocados", 8),
];

/// The mock store header.
pub fn mock_store() -> StoreDto {
    StoreDto {
        name: "Fresh Market".to_string(),
        rating: 4.8,
        opening_time: "8:00 AM".to_string(),
        closing_time: "10:00 PM".to_string(),
    }
}

/// The fixed twelve-item grocery catalog.
pub fn mock_catalog() -> Vec<ProductDto> {
    CATALOG
        .iter()
        .enumerate()
        .map(|(index, (name, price))| ProductDto {
            id: Some((index + 1).to_string()),
            name: (*name).to_string(),
            price: *price,
            image_url: MOCK_IMAGE_URL.to_string(),
        })
        .collect()
}

/// Deterministic gateway with optional simulated latency.
#[derive(Debug, Default)]
pub struct MockGateway {
    latency: bool,
    submitted: Mutex<Vec<OrderRequestDto>>,
}

impl MockGateway {
    /// Mock with simulated latency (500 / 800 / 1000 ms).
    pub fn new() -> Self {
        Self {
            latency: true,
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Mock that answers immediately.
    pub fn instant() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        if config.mock_latency {
            Self::new()
        } else {
            Self::instant()
        }
    }

    /// The most recent [`SUBMITTED_ORDER_HISTORY`] accepted orders, oldest first.
    pub async fn submitted_orders(&self) -> Vec<OrderRequestDto> {
        self.submitted.lock().await.clone()
    }

    async fn simulate(&self, latency: Duration) {
        if self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl StoreGateway for MockGateway {
    async fn fetch_store_info(&self) -> RemoteResult<StoreDto> {
        self.simulate(STORE_INFO_LATENCY).await;
        Ok(mock_store())
    }

    async fn fetch_products(&self) -> RemoteResult<Vec<ProductDto>> {
        self.simulate(PRODUCTS_LATENCY).await;
        Ok(mock_catalog())
    }

    async fn submit_order(&self, request: &OrderRequestDto) -> RemoteResult<bool> {
        self.simulate(ORDER_LATENCY).await;
        info!(
            units = request.products.len(),
            address = %request.delivery_address,
            "Mock order accepted"
        );
        let mut submitted = self.submitted.lock().await;
        if submitted.len() == SUBMITTED_ORDER_HISTORY {
            submitted.remove(0);
        }
        submitted.push(request.clone());
        Ok(true)
    }
}
