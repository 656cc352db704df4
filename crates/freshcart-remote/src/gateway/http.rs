//! Live gateway over HTTP (reqwest).

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::StoreGateway;
use crate::config::ApiConfig;
use crate::dto::{OrderRequestDto, ProductDto, ProductResponseDto, StoreDto};
use crate::error::{ConfigError, ConfigResult, Failure, RemoteResult};

/// Gateway backed by the storefront HTTP API.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Builds a client with the configured timeout.
    pub fn new(config: &ApiConfig) -> ConfigResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ConfigError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    /// The API root requests go to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> RemoteResult<T> {
        let url = self.endpoint(path);
        let started = Instant::now();

        let response = self.client.get(&url).send().await?;
        let body = success_body(response, "GET", &url, started).await?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse response from {}", url
            );
            Failure::from(e)
        })
    }
}

#[async_trait]
impl StoreGateway for HttpGateway {
    async fn fetch_store_info(&self) -> RemoteResult<StoreDto> {
        self.get_json("storeInfo").await
    }

    async fn fetch_products(&self) -> RemoteResult<Vec<ProductDto>> {
        let response: ProductResponseDto = self.get_json("products").await?;
        let page = &response.data.product_result.pagination_info;
        debug!(
            total_count = page.total_count,
            current_page = page.current_page,
            total_pages = page.total_pages,
            "Fetched product page"
        );
        Ok(response.into_products())
    }

    async fn submit_order(&self, request: &OrderRequestDto) -> RemoteResult<bool> {
        let url = self.endpoint("order");
        let started = Instant::now();

        let response = self.client.post(&url).json(request).send().await?;
        success_body(response, "POST", &url, started).await?;

        Ok(true)
    }
}

/// Returns the body of a 2xx response, or a `Failure::Status` for anything else.
async fn success_body(
    response: reqwest::Response,
    method: &str,
    url: &str,
    started: Instant,
) -> RemoteResult<String> {
    let status = response.status();
    let retry_after_secs = retry_after(response.headers());
    let body = response.text().await;

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    debug!(method, url, status = status.as_u16(), elapsed_ms, "Storefront API response");

    if !status.is_success() {
        warn!(method, url, status = status.as_u16(), "Storefront API returned non-success status");
        return Err(Failure::status(status.as_u16(), body.ok(), retry_after_secs));
    }

    Ok(body?)
}

/// Integer `Retry-After` header, if any. HTTP-date values are ignored.
fn retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
}
