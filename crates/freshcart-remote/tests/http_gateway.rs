//! End-to-end tests for `HttpGateway` against a local axum server.

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use freshcart_core::AppError;
use freshcart_remote::{classify, ApiConfig, HttpGateway, OrderRequestDto, ProductDto, StoreGateway};
use serde_json::{json, Value};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/")
}

fn gateway(base_url: &str) -> HttpGateway {
    HttpGateway::new(&ApiConfig::new(base_url, false)).unwrap()
}

fn order(products: Vec<ProductDto>) -> OrderRequestDto {
    OrderRequestDto {
        products,
        delivery_address: "12 Market Street".into(),
    }
}

fn apple() -> ProductDto {
    ProductDto {
        id: Some("63476538".into()),
        name: "Apple".into(),
        price: 5,
        image_url: "https://img/apple.png".into(),
    }
}

#[tokio::test]
async fn test_fetch_store_info() {
    let router = Router::new().route(
        "/storeInfo",
        get(|| async {
            Json(json!({
                "name": "Corner Shop",
                "rating": 4.2,
                "openingTime": "7:00 AM",
                "closingTime": "9:00 PM"
            }))
        }),
    );
    let base = serve(router).await;

    let store = gateway(&base).fetch_store_info().await.unwrap();

    assert_eq!(store.name, "Corner Shop");
    assert_eq!(store.closing_time, "9:00 PM");
}

#[tokio::test]
async fn test_fetch_products_unwraps_envelope() {
    let router = Router::new().route(
        "/products",
        get(|| async {
            Json(json!({
                "data": {"ProductResult": {
                    "PaginationInfo": {"total_count": 2, "current_page": 1, "total_pages": 1},
                    "Products": [
                        {"id": "1", "name": "Apple", "price": 5, "imageUrl": "a"},
                        {"id": "2", "name": "Bread", "price": 4, "imageUrl": "b"}
                    ]
                }}
            }))
        }),
    );
    let base = serve(router).await;

    let products = gateway(&base).fetch_products().await.unwrap();

    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Apple", "Bread"]);
}

#[tokio::test]
async fn test_submit_order_posts_expanded_body() {
    let seen: Arc<Mutex<Vec<Value>>> = Arc::default();
    let router = Router::new().route(
        "/order",
        post({
            let seen = seen.clone();
            move |Json(body): Json<Value>| {
                let seen = seen.clone();
                async move {
                    seen.lock().unwrap().push(body);
                    StatusCode::CREATED
                }
            }
        }),
    );
    let base = serve(router).await;

    let accepted = gateway(&base)
        .submit_order(&order(vec![apple(), apple()]))
        .await
        .unwrap();

    assert!(accepted);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0]["delivery_address"], "12 Market Street");
    assert_eq!(seen[0]["products"].as_array().unwrap().len(), 2);
    assert_eq!(seen[0]["products"][1]["imageUrl"], "https://img/apple.png");
}

#[tokio::test]
async fn test_rate_limited_order() {
    let router = Router::new().route(
        "/order",
        post(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                [("Retry-After", "7")],
                "Usage limit reached",
            )
        }),
    );
    let base = serve(router).await;

    let failure = gateway(&base).submit_order(&order(vec![apple()])).await.unwrap_err();
    let error = classify(failure);

    assert_eq!(
        error,
        AppError::TooManyRequests {
            retry_after_secs: Some(7)
        }
    );
    assert_eq!(
        error.user_message(),
        "You've hit the request limit. Please try again in a moment."
    );
}

#[tokio::test]
async fn test_rejected_order_keeps_body_text() {
    let router = Router::new().route(
        "/order",
        post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, "Address outside delivery area") }),
    );
    let base = serve(router).await;

    let failure = gateway(&base).submit_order(&order(vec![apple()])).await.unwrap_err();

    assert_eq!(
        classify(failure),
        AppError::Http {
            status: 422,
            message: Some("Address outside delivery area".into())
        }
    );
}

#[tokio::test]
async fn test_server_error_on_get() {
    let router = Router::new().route(
        "/storeInfo",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = serve(router).await;

    let failure = gateway(&base).fetch_store_info().await.unwrap_err();
    let error = classify(failure);

    assert_eq!(error, AppError::Http { status: 500, message: None });
    assert_eq!(error.user_message(), "Server error. Please try again later.");
}

#[tokio::test]
async fn test_missing_route_is_404() {
    let base = serve(Router::new()).await;

    let error = classify(gateway(&base).fetch_products().await.unwrap_err());

    assert!(matches!(error, AppError::Http { status: 404, .. }));
    assert_eq!(error.user_message(), "Requested content was not found.");
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let router = Router::new().route("/products", get(|| async { "[1, 2, 3]" }));
    let base = serve(router).await;

    let error = classify(gateway(&base).fetch_products().await.unwrap_err());

    assert!(matches!(error, AppError::Serialization(Some(_))));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let failure = gateway(&format!("http://{addr}"))
        .fetch_store_info()
        .await
        .unwrap_err();

    assert_eq!(classify(failure), AppError::Network);
}
