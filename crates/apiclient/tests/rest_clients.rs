use apiclient::{
    abstract_trait::{InventoryApiTrait, OrderApiTrait, ProductApiTrait},
    rest_client::{RestInventoryClient, RestOrderClient, RestProductClient},
};
use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use chrono::NaiveDate;
use serde_json::json;
use shared::{
    domain::requests::{CreateOrderRequest, CreateProductRequest, UpdateInventoryRequest},
    errors::ClientError,
    model::{InventoryRecord, Order, Product},
};

async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve fake backend");
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn create_product_decodes_backend_reply() {
    let app = Router::new().route(
        "/api/products",
        post(|Json(body): Json<CreateProductRequest>| async move {
            (
                StatusCode::CREATED,
                Json(Product {
                    id: 42,
                    name: body.name,
                    description: body.description,
                    price: body.price,
                }),
            )
        }),
    );
    let base = spawn_backend(app).await;
    let client = RestProductClient::new(reqwest::Client::new(), base);

    let created = client
        .create(&CreateProductRequest {
            name: "Keyboard".to_string(),
            description: "Mechanical".to_string(),
            price: 129.99,
        })
        .await
        .expect("create product");

    assert_eq!(created.id, 42);
    assert_eq!(created.name, "Keyboard");
    assert_eq!(created.price, 129.99);
}

#[tokio::test]
async fn create_product_maps_bare_500_to_status_line() {
    let app = Router::new().route(
        "/api/products",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = spawn_backend(app).await;
    let client = RestProductClient::new(reqwest::Client::new(), base);

    let err = client
        .create(&CreateProductRequest {
            name: "Mouse".to_string(),
            description: "Ergonomic".to_string(),
            price: 25.0,
        })
        .await
        .expect_err("expected failure");

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "500 Internal Server Error");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_order_extracts_error_field_from_rejection() {
    let app = Router::new().route(
        "/api/orders",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Insufficient stock" })),
            )
        }),
    );
    let base = spawn_backend(app).await;
    let client = RestOrderClient::new(reqwest::Client::new(), base);

    let err = client
        .create(&CreateOrderRequest {
            product_id: 7,
            quantity: 2,
            total_price: 50.0,
        })
        .await
        .expect_err("expected rejection");

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "Insufficient stock");
}

#[tokio::test]
async fn list_orders_decodes_backend_timestamps() {
    let created_at = NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(12, 30, 0))
        .expect("valid timestamp");

    let orders = vec![Order {
        id: 1,
        product_id: 9,
        quantity: 2,
        total_price: 61.5,
        created_at: Some(created_at),
    }];
    let app = Router::new().route("/api/orders", get(move || async move { Json(orders) }));
    let base = spawn_backend(app).await;
    let client = RestOrderClient::new(reqwest::Client::new(), base);

    let listed = client.list().await.expect("list orders");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].product_id, 9);
    assert_eq!(listed[0].created_at, Some(created_at));
}

#[tokio::test]
async fn delete_product_accepts_empty_success() {
    let app = Router::new().route(
        "/api/products/{id}",
        delete(|Path(id): Path<i64>| async move {
            assert_eq!(id, 7);
            StatusCode::NO_CONTENT
        }),
    );
    let base = spawn_backend(app).await;
    let client = RestProductClient::new(reqwest::Client::new(), base);

    client.delete(7).await.expect("delete product");
}

#[tokio::test]
async fn set_quantity_puts_new_stock_level() {
    let app = Router::new().route(
        "/api/inventory/{product_id}",
        put(
            |Path(product_id): Path<i64>, Json(body): Json<UpdateInventoryRequest>| async move {
                Json(InventoryRecord {
                    id: Some(1),
                    product_id,
                    quantity: body.quantity,
                })
            },
        ),
    );
    let base = spawn_backend(app).await;
    let client = RestInventoryClient::new(reqwest::Client::new(), base);

    let record = client.set_quantity(3, 100).await.expect("set quantity");

    assert_eq!(record.product_id, 3);
    assert_eq!(record.quantity, 100);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let app = Router::new().route("/api/products", get(|| async { "definitely not json" }));
    let base = spawn_backend(app).await;
    let client = RestProductClient::new(reqwest::Client::new(), base);

    let err = client.list().await.expect_err("expected decode failure");

    assert!(matches!(err, ClientError::Decode(_)), "got {err:?}");
}
