//! # Store Session
//!
//! The storefront state machine: one per shopping session.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Session State Transitions                           │
//! │                                                                         │
//! │  load()/refresh()                                                      │
//! │    is_loading=true, error=None                                          │
//! │        │  join!(store info, products)   (one spawned task)             │
//! │        ▼                                                                │
//! │    ONE update: store?, products?, error?, is_loading=false              │
//! │    (applied inside the task, even if the caller stops awaiting)         │
//! │                                                                         │
//! │  place_order(on_success)                                               │
//! │    is_placing_order already true ──► Ignored (no gateway call)         │
//! │    else is_placing_order=true, order_error=None                         │
//! │        │  PlaceOrder(cart, address)     (spawned task)                 │
//! │        ▼                                                                │
//! │    Ok(true)  ──► last_order_info, on_success(info)                      │
//! │    Ok(false) ──► order_error = rejection message                        │
//! │    Err(e)    ──► order_error = e.user_message()                         │
//! │    panic     ──► order_error = unexpected-error message                 │
//! │    ALWAYS    ──► is_placing_order=false   (inside the task)            │
//! │                                                                         │
//! │  Cart operations apply synchronously, one snapshot replacement each.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Observing
//! `subscribe()` hands out a `watch::Receiver`; `snapshot()` clones the
//! current value. Readers never see a half-applied update.

use std::sync::Arc;

use chrono::Utc;
use freshcart_core::{AppResult, LastOrderInfo, Order, Product, Store};
use freshcart_data::Repositories;
use freshcart_remote::StoreGateway;
use tokio::sync::watch;
use tokio::task::JoinError;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::snapshot::StoreSnapshot;
use crate::usecase::UseCases;

/// Shown when the server declines an order without an error.
pub const ORDER_REJECTED_MESSAGE: &str = "Failed to place order. Please try again.";

/// Result of [`StoreSession::place_order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOrderOutcome {
    /// Accepted; the summary was stored in the snapshot.
    Placed(LastOrderInfo),
    /// The server declined without an error.
    Rejected,
    /// Validation or remote failure, with the message shown to the user.
    Failed(String),
    /// Another submission was already in flight; nothing was sent.
    Ignored,
}

/// Session state machine. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct StoreSession {
    id: Uuid,
    state: Arc<watch::Sender<StoreSnapshot>>,
    use_cases: UseCases,
}

impl StoreSession {
    /// Creates a session over `gateway`. Nothing is fetched until [`load`](Self::load).
    pub fn new(gateway: Arc<dyn StoreGateway>) -> Self {
        Self::with_use_cases(UseCases::new(&Repositories::new(gateway)))
    }

    pub fn with_use_cases(use_cases: UseCases) -> Self {
        let (state, _) = watch::channel(StoreSnapshot::default());
        let id = Uuid::new_v4();
        debug!(session = %id, "Session created");
        Self {
            id,
            state: Arc::new(state),
            use_cases,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Receiver that is notified on every snapshot replacement.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.state.subscribe()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.state.borrow().clone()
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Fetches store info and products concurrently and folds both results
    /// into one snapshot update.
    ///
    /// A failure in one half does not hide the other half's data. When both
    /// fail, the store info message is shown. The fetch and the fold run in
    /// a spawned task, so `is_loading` is reset even if the caller stops
    /// awaiting.
    pub async fn load(&self) {
        info!(session = %self.id, "Loading store");
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error_message = None;
        });

        let state = self.state.clone();
        let session = self.id;
        let get_store_info = self.use_cases.get_store_info.clone();
        let get_products = self.use_cases.get_products.clone();
        let task = tokio::spawn(async move {
            let fetch = tokio::spawn(async move {
                tokio::join!(get_store_info.execute(), get_products.execute())
            });
            apply_load(&state, session, fetch.await);
        });

        if let Err(fault) = task.await {
            apply_load(&self.state, self.id, Err(fault));
        }

        let (products, failed) = {
            let snapshot = self.state.borrow();
            (snapshot.products.len(), snapshot.error_message.is_some())
        };
        info!(session = %self.id, products, failed, "Store load finished");
    }

    /// Same as [`load`](Self::load).
    pub async fn refresh(&self) {
        self.load().await;
    }

    /// Dismisses the load error.
    pub fn clear_error(&self) {
        self.state.send_if_modified(|s| s.error_message.take().is_some());
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds one unit of `product`.
    pub fn add_to_cart(&self, product: &Product) {
        self.state.send_modify(|s| s.cart.add(product));
        debug!(session = %self.id, product = %product.name, "Added to cart");
    }

    /// Removes one unit of `product`, dropping its line at zero.
    pub fn remove_from_cart(&self, product: &Product) {
        self.state.send_if_modified(|s| s.cart.remove_one(product));
    }

    /// Drops the line for `product` whatever its quantity.
    pub fn remove_item_from_cart(&self, product: &Product) {
        self.state.send_if_modified(|s| s.cart.remove_all(product));
    }

    /// Units of `product` in the cart.
    pub fn quantity(&self, product: &Product) -> u32 {
        self.state.borrow().cart.quantity(product)
    }

    pub fn set_delivery_address(&self, address: impl Into<String>) {
        let address = address.into();
        self.state.send_modify(|s| s.delivery_address = address);
    }

    pub fn clear_cart(&self) {
        self.state.send_if_modified(|s| {
            let had_items = !s.cart.is_empty();
            s.cart.clear();
            had_items
        });
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    /// Submits the current cart to the current delivery address.
    ///
    /// Ignored while another submission is in flight. The submission and the
    /// snapshot update run in a spawned task: if the caller stops awaiting,
    /// the order still completes and `is_placing_order` is still reset, but
    /// `on_success` is not called.
    ///
    /// `on_success` runs after the snapshot has been updated; callers
    /// typically clear the cart and navigate from it.
    pub async fn place_order<F>(&self, on_success: F) -> PlaceOrderOutcome
    where
        F: FnOnce(&LastOrderInfo),
    {
        let mut request = None;
        self.state.send_if_modified(|s| {
            if s.is_placing_order {
                return false;
            }
            s.is_placing_order = true;
            s.order_error_message = None;
            request = Some((s.cart.items().to_vec(), s.delivery_address.clone()));
            true
        });

        let Some((items, address)) = request else {
            debug!(session = %self.id, "Order already in flight, ignoring");
            return PlaceOrderOutcome::Ignored;
        };

        info!(session = %self.id, lines = items.len(), "Placing order");

        let state = self.state.clone();
        let session = self.id;
        let place_order = self.use_cases.place_order.clone();
        let task = tokio::spawn(async move {
            let submission = {
                let items = items.clone();
                let address = address.clone();
                tokio::spawn(async move { place_order.execute(items, &address).await })
            };

            let outcome = match submission.await {
                Ok(Ok(true)) => {
                    let order = Order::new(items, address);
                    PlaceOrderOutcome::Placed(LastOrderInfo::capture(&order, Utc::now()))
                }
                Ok(Ok(false)) => PlaceOrderOutcome::Rejected,
                Ok(Err(e)) => PlaceOrderOutcome::Failed(e.user_message()),
                Err(fault) => unexpected_failure(session, fault),
            };
            apply_order_outcome(&state, &outcome);
            outcome
        });

        let outcome = match task.await {
            Ok(outcome) => outcome,
            Err(fault) => {
                let outcome = unexpected_failure(self.id, fault);
                apply_order_outcome(&self.state, &outcome);
                outcome
            }
        };

        match &outcome {
            PlaceOrderOutcome::Placed(info) => {
                info!(
                    session = %self.id,
                    items = info.item_count,
                    total = %info.total_amount,
                    "Order placed"
                );
                on_success(info);
            }
            other => warn!(session = %self.id, outcome = ?other, "Order not placed"),
        }

        outcome
    }

    /// Dismisses the order error.
    pub fn clear_order_error(&self) {
        self.state.send_if_modified(|s| s.order_error_message.take().is_some());
    }
}

// =============================================================================
// Result Folding
// =============================================================================

type Fetched = (AppResult<Store>, AppResult<Vec<Product>>);

/// Folds a finished load into one snapshot update and clears `is_loading`.
fn apply_load(
    state: &watch::Sender<StoreSnapshot>,
    session: Uuid,
    fetched: Result<Fetched, JoinError>,
) {
    let (store_result, products_result) = match fetched {
        Ok(results) => results,
        Err(fault) => {
            let detail = fault_detail(fault);
            error!(%session, %detail, "Store load aborted");
            state.send_modify(|s| {
                s.error_message = Some(format!("An unexpected error occurred: {detail}"));
                s.is_loading = false;
            });
            return;
        }
    };

    state.send_modify(|s| {
        let mut message = None;

        match store_result {
            Ok(store) => s.store = Some(store),
            Err(e) => message = Some(format!("Failed to load store info: {}", e.user_message())),
        }
        match products_result {
            Ok(products) => s.products = products,
            Err(e) => {
                message.get_or_insert_with(|| {
                    format!("Failed to load products: {}", e.user_message())
                });
            }
        }

        s.error_message = message;
        s.is_loading = false;
    });
}

/// Records a finished submission and clears `is_placing_order`.
fn apply_order_outcome(state: &watch::Sender<StoreSnapshot>, outcome: &PlaceOrderOutcome) {
    state.send_modify(|s| {
        match outcome {
            PlaceOrderOutcome::Placed(info) => s.last_order_info = Some(info.clone()),
            PlaceOrderOutcome::Rejected => {
                s.order_error_message = Some(ORDER_REJECTED_MESSAGE.to_string())
            }
            PlaceOrderOutcome::Failed(message) => s.order_error_message = Some(message.clone()),
            PlaceOrderOutcome::Ignored => {}
        }
        s.is_placing_order = false;
    });
}

fn unexpected_failure(session: Uuid, fault: JoinError) -> PlaceOrderOutcome {
    let detail = fault_detail(fault);
    error!(%session, %detail, "Order submission aborted");
    PlaceOrderOutcome::Failed(format!("An unexpected error occurred: {detail}"))
}

/// Human-readable description of a task that panicked or was cancelled.
fn fault_detail(fault: JoinError) -> String {
    if fault.is_cancelled() {
        return "task was cancelled".to_string();
    }

    match fault.try_into_panic() {
        Ok(payload) => payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "task panicked".to_string()),
        Err(fault) => fault.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use freshcart_core::Money;
    use freshcart_remote::{FakeGateway, Failure};

    fn session_with(fake: &Arc<FakeGateway>) -> StoreSession {
        StoreSession::new(fake.clone())
    }

    fn apple() -> Product {
        Product::new("Apple", Money::from_units(5), "https://img/apple")
    }

    fn bread() -> Product {
        Product::new("Bread", Money::from_units(4), "https://img/bread")
    }

    const NETWORK_MESSAGE: &str =
        "Network error. Please check your internet connection and try again.";

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_load_success() {
        let fake = Arc::new(FakeGateway::new());
        let session = session_with(&fake);

        session.load().await;

        let snapshot = session.snapshot();
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.store.unwrap().name, "Fresh Market");
        assert_eq!(snapshot.products.len(), 12);
        assert_eq!(snapshot.error_message, None);
        assert_eq!(fake.store_info_calls(), 1);
        assert_eq!(fake.products_calls(), 1);
    }

    #[tokio::test]
    async fn test_products_failure_keeps_store_info() {
        let fake = Arc::new(
            FakeGateway::new().with_products(Err(Failure::Transport("refused".into()))),
        );
        let session = session_with(&fake);

        session.load().await;

        let snapshot = session.snapshot();
        assert!(!snapshot.is_loading);
        assert!(snapshot.store.is_some());
        assert!(snapshot.products.is_empty());
        assert_eq!(
            snapshot.error_message.as_deref(),
            Some(format!("Failed to load products: {NETWORK_MESSAGE}").as_str())
        );
    }

    #[tokio::test]
    async fn test_store_failure_keeps_products() {
        let fake = Arc::new(
            FakeGateway::new().with_store_info(Err(Failure::status(500, None, None))),
        );
        let session = session_with(&fake);

        session.load().await;

        let snapshot = session.snapshot();
        assert!(snapshot.store.is_none());
        assert_eq!(snapshot.products.len(), 12);
        assert_eq!(
            snapshot.error_message.as_deref(),
            Some("Failed to load store info: Server error. Please try again later.")
        );
    }

    #[tokio::test]
    async fn test_both_failures_report_store_info() {
        let fake = Arc::new(
            FakeGateway::new()
                .with_store_info(Err(Failure::Transport("down".into())))
                .with_products(Err(Failure::Decode("bad".into()))),
        );
        let session = session_with(&fake);

        session.load().await;

        let snapshot = session.snapshot();
        assert!(!snapshot.is_loading);
        assert_eq!(
            snapshot.error_message.as_deref(),
            Some(format!("Failed to load store info: {NETWORK_MESSAGE}").as_str())
        );
    }

    #[tokio::test]
    async fn test_fault_during_load_is_contained() {
        let fake = Arc::new(FakeGateway::new().with_products_panic());
        let session = session_with(&fake);

        session.load().await;

        let snapshot = session.snapshot();
        assert!(!snapshot.is_loading);
        assert_eq!(
            snapshot.error_message.as_deref(),
            Some("An unexpected error occurred: scripted products panic")
        );
    }

    #[tokio::test]
    async fn test_refresh_clears_previous_error() {
        let fake = Arc::new(FakeGateway::new());
        let session = session_with(&fake);
        session
            .state
            .send_modify(|s| s.error_message = Some("stale".into()));

        session.refresh().await;

        assert_eq!(session.snapshot().error_message, None);
        assert_eq!(fake.store_info_calls(), 1);
    }

    #[tokio::test]
    async fn test_subscriber_sees_loaded_products() {
        let fake = Arc::new(FakeGateway::new());
        let session = session_with(&fake);
        let mut rx = session.subscribe();

        let load = tokio::spawn({
            let session = session.clone();
            async move { session.load().await }
        });

        rx.wait_for(|s| !s.products.is_empty()).await.unwrap();
        load.await.unwrap();
        assert!(!rx.borrow().is_loading);
    }

    #[test]
    fn test_clear_error() {
        let session = StoreSession::new(Arc::new(FakeGateway::new()));
        session
            .state
            .send_modify(|s| s.error_message = Some("boom".into()));

        session.clear_error();

        assert_eq!(session.snapshot().error_message, None);
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    #[test]
    fn test_quantity_after_adds_and_removes() {
        let fake = Arc::new(FakeGateway::new());
        for adds in 0..4u32 {
            for removes in 0..6u32 {
                let session = session_with(&fake);
                for _ in 0..adds {
                    session.add_to_cart(&apple());
                }
                for _ in 0..removes {
                    session.remove_from_cart(&apple());
                }

                let expected = adds.saturating_sub(removes);
                assert_eq!(session.quantity(&apple()), expected);
                assert_eq!(session.snapshot().cart.is_empty(), expected == 0);
            }
        }
    }

    #[test]
    fn test_remove_item_from_cart_drops_line() {
        let session = StoreSession::new(Arc::new(FakeGateway::new()));
        for _ in 0..5 {
            session.add_to_cart(&apple());
        }
        session.add_to_cart(&bread());

        session.remove_item_from_cart(&apple());

        assert_eq!(session.quantity(&apple()), 0);
        assert_eq!(session.quantity(&bread()), 1);
    }

    #[test]
    fn test_cart_totals_and_clear() {
        let session = StoreSession::new(Arc::new(FakeGateway::new()));
        session.add_to_cart(&apple());
        session.add_to_cart(&apple());
        session.add_to_cart(&bread());

        let snapshot = session.snapshot();
        assert_eq!(snapshot.total_price(), Money::from_units(14));
        assert_eq!(snapshot.total_cart_items(), 3);

        session.clear_cart();
        assert!(session.snapshot().cart.is_empty());
    }

    #[test]
    fn test_cart_changes_notify_subscribers() {
        let session = StoreSession::new(Arc::new(FakeGateway::new()));
        let mut rx = session.subscribe();
        rx.mark_unchanged();

        // Removing something absent changes nothing
        session.remove_from_cart(&apple());
        assert!(!rx.has_changed().unwrap());

        session.add_to_cart(&apple());
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().cart.line_count(), 1);
    }

    // -------------------------------------------------------------------------
    // Ordering
    // -------------------------------------------------------------------------

    fn ready_session(fake: &Arc<FakeGateway>) -> StoreSession {
        let session = session_with(fake);
        session.add_to_cart(&apple());
        session.add_to_cart(&apple());
        session.add_to_cart(&bread());
        session.set_delivery_address("12 Market Street");
        session
    }

    #[tokio::test]
    async fn test_place_order_success() {
        let fake = Arc::new(FakeGateway::new());
        let session = ready_session(&fake);
        let callbacks = Arc::new(AtomicUsize::new(0));

        let outcome = session
            .place_order({
                let session = session.clone();
                let callbacks = callbacks.clone();
                move |info| {
                    assert_eq!(info.item_count, 3);
                    callbacks.fetch_add(1, Ordering::SeqCst);
                    session.clear_cart();
                }
            })
            .await;

        let PlaceOrderOutcome::Placed(info) = outcome else {
            panic!("expected Placed, got {outcome:?}");
        };
        assert_eq!(info.item_count, 3);
        assert_eq!(info.total_amount, Money::from_units(14));
        assert_eq!(info.delivery_address, "12 Market Street");
        assert_eq!(callbacks.load(Ordering::SeqCst), 1);

        let snapshot = session.snapshot();
        assert!(!snapshot.is_placing_order);
        assert_eq!(snapshot.order_error_message, None);
        assert_eq!(snapshot.last_order_info, Some(info));
        assert!(snapshot.cart.is_empty());

        let submitted = fake.submitted_orders();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].products.len(), 3);
    }

    #[tokio::test]
    async fn test_place_order_rejected() {
        let fake = Arc::new(FakeGateway::new().with_order_response(Ok(false)));
        let session = ready_session(&fake);

        let outcome = session.place_order(|_| panic!("rejected order")).await;

        assert_eq!(outcome, PlaceOrderOutcome::Rejected);
        let snapshot = session.snapshot();
        assert!(!snapshot.is_placing_order);
        assert_eq!(snapshot.order_error_message.as_deref(), Some(ORDER_REJECTED_MESSAGE));
        assert_eq!(snapshot.last_order_info, None);
        assert_eq!(snapshot.total_cart_items(), 3);
    }

    #[tokio::test]
    async fn test_place_order_rate_limited() {
        let fake = Arc::new(
            FakeGateway::new().with_order_response(Err(Failure::status(429, None, None))),
        );
        let session = ready_session(&fake);

        session.place_order(|_| {}).await;

        let snapshot = session.snapshot();
        assert!(!snapshot.is_placing_order);
        assert_eq!(
            snapshot.order_error_message.as_deref(),
            Some("You've hit the request limit. Please try again in a moment.")
        );
    }

    #[tokio::test]
    async fn test_empty_cart_fails_without_gateway_call() {
        let fake = Arc::new(FakeGateway::new());
        let session = session_with(&fake);
        session.set_delivery_address("somewhere");

        let outcome = session.place_order(|_| {}).await;

        assert_eq!(outcome, PlaceOrderOutcome::Failed("Cart is empty".into()));
        assert_eq!(fake.order_calls(), 0);
        assert!(!session.snapshot().is_placing_order);
    }

    #[tokio::test]
    async fn test_blank_address_fails_without_gateway_call() {
        let fake = Arc::new(FakeGateway::new());
        let session = ready_session(&fake);
        session.set_delivery_address("  ");

        session.place_order(|_| {}).await;

        assert_eq!(fake.order_calls(), 0);
        assert_eq!(
            session.snapshot().order_error_message.as_deref(),
            Some("Delivery address is required")
        );
    }

    #[tokio::test]
    async fn test_second_submission_is_ignored_while_in_flight() {
        let fake = Arc::new(FakeGateway::new());
        let gate = fake.gate_orders();
        let session = ready_session(&fake);

        let first = tokio::spawn({
            let session = session.clone();
            async move { session.place_order(|_| {}).await }
        });

        while fake.order_calls() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(session.snapshot().is_placing_order);

        let second = session.place_order(|_| panic!("duplicate submission")).await;
        assert_eq!(second, PlaceOrderOutcome::Ignored);
        assert_eq!(fake.order_calls(), 1);

        gate.notify_one();
        assert!(matches!(first.await.unwrap(), PlaceOrderOutcome::Placed(_)));
        assert!(!session.snapshot().is_placing_order);
        assert_eq!(fake.order_calls(), 1);
    }

    #[tokio::test]
    async fn test_abandoned_submission_still_resets_flag() {
        let fake = Arc::new(FakeGateway::new());
        let gate = fake.gate_orders();
        let session = ready_session(&fake);
        let mut rx = session.subscribe();

        let abandoned = tokio::time::timeout(
            Duration::from_millis(50),
            session.place_order(|_| panic!("caller went away")),
        )
        .await;
        assert!(abandoned.is_err());
        assert!(session.snapshot().is_placing_order);

        gate.notify_one();
        rx.wait_for(|s| !s.is_placing_order).await.unwrap();
        assert!(session.snapshot().last_order_info.is_some());

        gate.notify_one();
        let retry = session.place_order(|_| {}).await;
        assert!(matches!(retry, PlaceOrderOutcome::Placed(_)));
        assert_eq!(fake.order_calls(), 2);
    }

    #[tokio::test]
    async fn test_abandoned_load_still_resets_flag() {
        let fake = Arc::new(FakeGateway::new());
        let gate = fake.gate_products();
        let session = session_with(&fake);
        let mut rx = session.subscribe();

        let abandoned = tokio::time::timeout(Duration::from_millis(50), session.load()).await;
        assert!(abandoned.is_err());
        assert!(session.snapshot().is_loading);

        gate.notify_one();
        rx.wait_for(|s| !s.is_loading).await.unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.products.len(), 12);
        assert_eq!(snapshot.error_message, None);
    }

    #[tokio::test]
    async fn test_new_attempt_clears_order_error() {
        let fake = Arc::new(FakeGateway::new().with_order_response(Ok(false)));
        let session = ready_session(&fake);

        session.place_order(|_| {}).await;
        assert!(session.snapshot().order_error_message.is_some());

        fake.set_order_response(Ok(true));
        let outcome = session.place_order(|_| {}).await;

        assert!(matches!(outcome, PlaceOrderOutcome::Placed(_)));
        assert_eq!(session.snapshot().order_error_message, None);
    }

    #[tokio::test]
    async fn test_last_order_info_is_overwritten() {
        let fake = Arc::new(FakeGateway::new());
        let session = ready_session(&fake);

        session.place_order(|_| {}).await;
        session.clear_cart();
        session.add_to_cart(&bread());
        session.set_delivery_address("Flat 4");
        session.place_order(|_| {}).await;

        let info = session.snapshot().last_order_info.unwrap();
        assert_eq!(info.item_count, 1);
        assert_eq!(info.total_amount, Money::from_units(4));
        assert_eq!(info.delivery_address, "Flat 4");
    }

    #[tokio::test]
    async fn test_clear_order_error() {
        let fake = Arc::new(
            FakeGateway::new().with_order_response(Err(Failure::status(403, None, None))),
        );
        let session = ready_session(&fake);
        session.place_order(|_| {}).await;
        assert_eq!(
            session.snapshot().order_error_message.as_deref(),
            Some("Access denied.")
        );

        session.clear_order_error();

        assert_eq!(session.snapshot().order_error_message, None);
    }
}
