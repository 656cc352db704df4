//! Scriptable gateway for tests.
//!
//! ```text
//! FakeGateway::new()
//!     .with_store_info(Err(Failure::Transport(..)))   scripted responses
//!     .with_order_response(Ok(false))
//!
//! fake.order_calls()                                  call counters
//! fake.submitted_orders()                             recorded bodies
//! let gate = fake.gate_orders(); ... gate.notify_one()  hold a submission open
//! let gate = fake.gate_products(); ...                 hold a catalog fetch open
//! ```

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::Notify;

use super::StoreGateway;
use crate::dto::{OrderRequestDto, ProductDto, StoreDto};
use crate::error::RemoteResult;
use crate::gateway::{mock_catalog, mock_store};

/// Gateway whose answers are set by the test.
pub struct FakeGateway {
    store_info: Mutex<RemoteResult<StoreDto>>,
    products: Mutex<RemoteResult<Vec<ProductDto>>>,
    order: Mutex<RemoteResult<bool>>,
    panic_on_products: AtomicBool,
    order_gate: Mutex<Option<Arc<Notify>>>,
    products_gate: Mutex<Option<Arc<Notify>>>,
    submitted: Mutex<Vec<OrderRequestDto>>,
    store_info_calls: AtomicUsize,
    products_calls: AtomicUsize,
    order_calls: AtomicUsize,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeGateway {
    /// Succeeds everywhere with the mock store and catalog.
    pub fn new() -> Self {
        Self {
            store_info: Mutex::new(Ok(mock_store())),
            products: Mutex::new(Ok(mock_catalog())),
            order: Mutex::new(Ok(true)),
            panic_on_products: AtomicBool::new(false),
            order_gate: Mutex::new(None),
            products_gate: Mutex::new(None),
            submitted: Mutex::new(Vec::new()),
            store_info_calls: AtomicUsize::new(0),
            products_calls: AtomicUsize::new(0),
            order_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_store_info(self, response: RemoteResult<StoreDto>) -> Self {
        *lock(&self.store_info) = response;
        self
    }

    pub fn with_products(self, response: RemoteResult<Vec<ProductDto>>) -> Self {
        *lock(&self.products) = response;
        self
    }

    pub fn with_order_response(self, response: RemoteResult<bool>) -> Self {
        self.set_order_response(response);
        self
    }

    /// Makes `fetch_products` panic, for fault-handling tests.
    pub fn with_products_panic(self) -> Self {
        self.panic_on_products.store(true, Ordering::SeqCst);
        self
    }

    /// Changes the order answer after construction.
    pub fn set_order_response(&self, response: RemoteResult<bool>) {
        *lock(&self.order) = response;
    }

    /// Holds every subsequent `submit_order` until the returned gate is notified.
    pub fn gate_orders(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *lock(&self.order_gate) = Some(gate.clone());
        gate
    }

    /// Holds every subsequent `fetch_products` until the returned gate is notified.
    pub fn gate_products(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *lock(&self.products_gate) = Some(gate.clone());
        gate
    }

    pub fn store_info_calls(&self) -> usize {
        self.store_info_calls.load(Ordering::SeqCst)
    }

    pub fn products_calls(&self) -> usize {
        self.products_calls.load(Ordering::SeqCst)
    }

    pub fn order_calls(&self) -> usize {
        self.order_calls.load(Ordering::SeqCst)
    }

    /// Order bodies received so far, oldest first.
    pub fn submitted_orders(&self) -> Vec<OrderRequestDto> {
        lock(&self.submitted).clone()
    }
}

#[async_trait]
impl StoreGateway for FakeGateway {
    async fn fetch_store_info(&self) -> RemoteResult<StoreDto> {
        self.store_info_calls.fetch_add(1, Ordering::SeqCst);
        lock(&self.store_info).clone()
    }

    async fn fetch_products(&self) -> RemoteResult<Vec<ProductDto>> {
        self.products_calls.fetch_add(1, Ordering::SeqCst);
        if self.panic_on_products.load(Ordering::SeqCst) {
            panic!("scripted products panic");
        }

        let gate = lock(&self.products_gate).clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        lock(&self.products).clone()
    }

    async fn submit_order(&self, request: &OrderRequestDto) -> RemoteResult<bool> {
        self.order_calls.fetch_add(1, Ordering::SeqCst);
        lock(&self.submitted).push(request.clone());

        let gate = lock(&self.order_gate).clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        lock(&self.order).clone()
    }
}
