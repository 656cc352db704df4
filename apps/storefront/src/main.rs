//! # freshcart
//!
//! Scripted walk through a shopping session: load the store, fill the cart,
//! place an order, print the confirmation.
//!
//! ```text
//! freshcart [DELIVERY_ADDRESS]
//!
//! FRESHCART_USE_MOCK=true freshcart "221B Baker Street"
//! ```

use anyhow::{bail, Context};
use freshcart_remote::{build_gateway, ApiConfig};
use freshcart_storefront::{init_tracing, PlaceOrderOutcome, StoreSession};
use tracing::info;

const DEFAULT_ADDRESS: &str = "221B Baker Street";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

    let config = ApiConfig::load_or_default(None);
    info!(
        base_url = %config.base_url(),
        use_mock = config.use_mock,
        "Starting FreshCart"
    );

    let gateway = build_gateway(&config).context("building storefront gateway")?;
    let session = StoreSession::new(gateway);

    session.load().await;
    let snapshot = session.snapshot();
    if let Some(message) = &snapshot.error_message {
        bail!("{message}");
    }

    if let Some(store) = &snapshot.store {
        println!("{} ★ {:.1}", store.name, store.rating);
        println!("Open {} – {}", store.opening_time, store.closing_time);
        println!();
    }

    // Two of the first product, one each of the next two
    let picks: Vec<_> = snapshot.products.iter().take(3).collect();
    if picks.is_empty() {
        bail!("the store has no products");
    }
    session.add_to_cart(picks[0]);
    for product in &picks {
        session.add_to_cart(product);
    }
    session.set_delivery_address(address);

    let cart = session.snapshot();
    for item in cart.cart_items() {
        println!(
            "  {:<20} {:>3} × {:<5} {}",
            item.product.name,
            item.quantity,
            item.product.price.to_string(),
            item.total_price()
        );
    }
    println!("  {} items, total {}", cart.total_cart_items(), cart.total_price());
    println!();

    let outcome = session
        .place_order({
            let session = session.clone();
            move |_| session.clear_cart()
        })
        .await;

    match outcome {
        PlaceOrderOutcome::Placed(info) => {
            println!("Order placed at {}", info.placed_at.format("%H:%M:%S"));
            println!("  {} items, total {}", info.item_count, info.total_amount);
            println!("  Delivering to {}", info.delivery_address);
            Ok(())
        }
        PlaceOrderOutcome::Rejected | PlaceOrderOutcome::Failed(_) => {
            let message = session
                .snapshot()
                .order_error_message
                .unwrap_or_else(|| "Order was not placed".to_string());
            bail!("{message}")
        }
        PlaceOrderOutcome::Ignored => bail!("an order is already in flight"),
    }
}
