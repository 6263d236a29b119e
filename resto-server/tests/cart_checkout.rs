//! 点餐流程集成测试
//!
//! 开购物车 → 加减菜品 → 结账生成订单。模拟网关延迟设为 0，
//! 结账立即确认。

use axum::{Router, body::Body};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use resto_server::{Config, ServerState, api};

fn test_config() -> Config {
    Config {
        http_port: 0,
        environment: "test".to_string(),
        tax_rate_percent: 10,
        payment_delay_ms: 0,
        payment_timeout_ms: 1000,
    }
}

fn app() -> Router {
    let state = ServerState::initialize(&test_config());
    api::build_app().with_state(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn open_cart(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/api/carts", None).await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn cart_add_update_remove_flow() {
    let app = app();
    let cart = open_cart(&app).await;

    // 同一菜品加两次合并为一行，数量 2
    let uri = format!("/api/carts/{cart}/items");
    send(&app, "POST", &uri, Some(json!({ "menu_item_id": 1 }))).await;
    let (_, view) = send(&app, "POST", &uri, Some(json!({ "menu_item_id": 1 }))).await;
    assert_eq!(view["lines"].as_array().unwrap().len(), 1);
    assert_eq!(view["lines"][0]["quantity"], 2);

    // 第二个菜品追加在后面
    let (_, view) = send(&app, "POST", &uri, Some(json!({ "menu_item_id": 4 }))).await;
    let lines = view["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["name"], "Es Teh Manis");

    // 2×45000 + 10000 = 100000，税 10%
    assert_eq!(view["totals"]["subtotal"], 100000.0);
    assert_eq!(view["totals"]["tax"], 10000.0);
    assert_eq!(view["totals"]["total"], 110000.0);

    // 覆写数量
    let (_, view) = send(
        &app,
        "PUT",
        &format!("/api/carts/{cart}/items/1"),
        Some(json!({ "quantity": 1 })),
    )
    .await;
    assert_eq!(view["totals"]["subtotal"], 55000.0);

    // 数量 0 等价于删行
    let (_, view) = send(
        &app,
        "PUT",
        &format!("/api/carts/{cart}/items/4"),
        Some(json!({ "quantity": 0 })),
    )
    .await;
    assert_eq!(view["lines"].as_array().unwrap().len(), 1);

    // 删除不存在的行是静默 no-op
    let (status, view) = send(&app, "DELETE", &format!("/api/carts/{cart}/items/999"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["lines"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn out_of_stock_item_is_rejected() {
    let app = app();
    let cart = open_cart(&app).await;

    // 种子数据里 Jus Alpukat (id 5) 状态为 Habis
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/carts/{cart}/items"),
        Some(json!({ "menu_item_id": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "E0005");

    let (_, view) = send(&app, "GET", &format!("/api/carts/{cart}"), None).await;
    assert!(view["lines"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_cart_and_unknown_item_are_not_found() {
    let app = app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/carts/00000000-0000-0000-0000-000000000000/items",
        Some(json!({ "menu_item_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let cart = open_cart(&app).await;
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/carts/{cart}/items"),
        Some(json!({ "menu_item_id": 999 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_cart_cannot_check_out() {
    let app = app();
    let cart = open_cart(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/carts/{cart}/checkout"),
        Some(json!({ "method": "cash" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "E0005");
}

#[tokio::test]
async fn checkout_creates_order_and_clears_cart() {
    let app = app();
    let cart = open_cart(&app).await;

    let uri = format!("/api/carts/{cart}/items");
    for _ in 0..2 {
        send(&app, "POST", &uri, Some(json!({ "menu_item_id": 1 }))).await;
        send(&app, "POST", &uri, Some(json!({ "menu_item_id": 4 }))).await;
    }

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/carts/{cart}/checkout"),
        Some(json!({ "method": "qris", "table": "Meja 1", "customer": "Budi Santoso" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let order = &body["order"];
    assert_eq!(order["id"], 1006);
    assert_eq!(order["subtotal"], 110000.0);
    assert_eq!(order["tax"], 11000.0);
    assert_eq!(order["total"], 121000.0);
    assert_eq!(order["payment"], "qris");
    assert_eq!(order["table"], "Meja 1");

    let receipt = &body["receipt"];
    assert_eq!(receipt["amount"], 121000.0);
    assert!(receipt["reference"].as_str().unwrap().starts_with("SIM-"));

    // 结账后购物车清空，但还在
    let (status, view) = send(&app, "GET", &format!("/api/carts/{cart}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(view["lines"].as_array().unwrap().is_empty());
    assert_eq!(view["totals"]["total"], 0.0);

    // 订单可以从订单接口查到
    let (status, fetched) = send(&app, "GET", "/api/orders/1006", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["total"], 121000.0);
}

#[tokio::test]
async fn price_is_captured_at_add_time() {
    let app = app();
    let cart = open_cart(&app).await;

    send(
        &app,
        "POST",
        &format!("/api/carts/{cart}/items"),
        Some(json!({ "menu_item_id": 1 })),
    )
    .await;

    // 菜单改价不影响已开的购物车
    send(
        &app,
        "PUT",
        "/api/menu/1",
        Some(json!({ "price": 99000.0 })),
    )
    .await;

    let (_, view) = send(&app, "GET", &format!("/api/carts/{cart}"), None).await;
    assert_eq!(view["lines"][0]["price"], 45000.0);
    assert_eq!(view["totals"]["subtotal"], 45000.0);
}
