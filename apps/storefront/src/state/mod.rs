//! # State Module
//!
//! Session state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐      ┌─────────────────────────────┐  │
//! │  │        StoreSession          │      │       StoreSnapshot         │  │
//! │  │                              │      │                             │  │
//! │  │  Arc<watch::Sender<..>> ─────┼─────►│  is_loading, store,         │  │
//! │  │  UseCases                    │      │  products, cart, errors,    │  │
//! │  │  session id (uuid)           │      │  delivery_address,          │  │
//! │  │                              │      │  is_placing_order,          │  │
//! │  │  load / cart ops / order     │      │  last_order_info            │  │
//! │  └──────────────────────────────┘      └─────────────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Every mutation replaces the snapshot under the watch channel lock   │
//! │  • is_placing_order is checked and set in the same replacement         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod session;
mod snapshot;

pub use session::{PlaceOrderOutcome, StoreSession, ORDER_REJECTED_MESSAGE};
pub use snapshot::StoreSnapshot;
