//! # freshcart-remote: Storefront API Gateway
//!
//! Everything that touches the network lives here, together with the one
//! function allowed to turn a network failure into an [`AppError`].
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Request Flow                                    │
//! │                                                                         │
//! │  Repository (freshcart-data)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────┐                                             │
//! │  │ Arc<dyn StoreGateway> │ ◄── build_gateway(&ApiConfig)               │
//! │  └───────────┬───────────┘                                             │
//! │              │                                                          │
//! │      ┌───────┴────────┐                                                 │
//! │      ▼                ▼                                                 │
//! │  HttpGateway     MockGateway                                           │
//! │  (reqwest)       (fixed catalog)                                       │
//! │      │                │                                                 │
//! │      └───────┬────────┘                                                 │
//! │              ▼                                                          │
//! │   Result<Dto, Failure> ──► classify() ──► AppError                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`config`] - `ApiConfig` (TOML file + env overrides)
//! - [`dto`] - Wire shapes
//! - [`gateway`] - `StoreGateway` and its implementations
//! - [`classify`] - `Failure` → `AppError`
//! - [`error`] - `Failure`, `ConfigError`

pub mod classify;
pub mod config;
pub mod dto;
pub mod error;
pub mod gateway;

pub use classify::classify;
pub use config::{ApiConfig, ApiRoute, DEFAULT_BASE_URL};
pub use dto::{OrderRequestDto, ProductDto, ProductResponseDto, StoreDto};
pub use error::{ConfigError, ConfigResult, Failure, RemoteResult};
#[cfg(any(test, feature = "test-util"))]
pub use gateway::FakeGateway;
pub use gateway::{build_gateway, HttpGateway, MockGateway, StoreGateway};

pub use freshcart_core::AppError;
