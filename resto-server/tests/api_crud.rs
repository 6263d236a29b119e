//! 管理端 API 集成测试
//!
//! 直接对路由做 oneshot 调用，不经过网络栈。断言里的数字来自
//! 启动时加载的种子数据。

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

fn empty_app() -> Router {
    let state = ServerState::empty(&test_config());
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

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn menu_filters_by_category_and_search() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/menu", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 8);

    // "Semua" 不过滤
    let (_, body) = send(&app, "GET", "/api/menu?category=Semua", None).await;
    assert_eq!(body.as_array().unwrap().len(), 8);

    let (_, body) = send(&app, "GET", "/api/menu?category=Minuman", None).await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    // 大小写无关的名称搜索
    let (_, body) = send(&app, "GET", "/api/menu?q=GORENG", None).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Nasi Goreng Spesial", "Mie Goreng Seafood"]);

    // 两个条件取交集
    let (_, body) = send(&app, "GET", "/api/menu?category=Minuman&q=es", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn menu_crud_lifecycle() {
    let app = app();

    let (status, created) = send(
        &app,
        "POST",
        "/api/menu",
        Some(json!({
            "name": "Gado-Gado",
            "category": "Makanan Pembuka",
            "price": 25000.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // 8 个种子菜品之后计数器到 9
    assert_eq!(created["id"], 9);
    assert_eq!(created["status"], "Tersedia");

    let (status, fetched) = send(&app, "GET", "/api/menu/9", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Gado-Gado");

    // 部分更新只动给定字段
    let (status, updated) = send(
        &app,
        "PUT",
        "/api/menu/9",
        Some(json!({ "price": 27000.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 27000.0);
    assert_eq!(updated["name"], "Gado-Gado");

    let (status, deleted) = send(&app, "DELETE", "/api/menu/9", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!(true));

    let (status, body) = send(&app, "GET", "/api/menu/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn duplicate_menu_name_is_conflict() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/menu",
        Some(json!({
            "name": "Sate Ayam",
            "category": "Makanan Utama",
            "price": 35000.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E0004");
}

#[tokio::test]
async fn validation_rejects_bad_payloads() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/menu",
        Some(json!({ "name": "  ", "category": "Minuman", "price": 10000.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    let (status, _) = send(
        &app,
        "POST",
        "/api/menu",
        Some(json!({ "name": "Kopi", "category": "Minuman", "price": -1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn customers_filter_by_membership_type() {
    let app = app();

    let (_, body) = send(&app, "GET", "/api/customers?type=VIP", None).await;
    let vips = body.as_array().unwrap();
    assert_eq!(vips.len(), 3);
    assert!(vips.iter().all(|c| c["type"] == "VIP"));

    // 搜索匹配任一指定字段 (邮箱)
    let (_, body) = send(&app, "GET", "/api/customers?q=dewi@", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn staff_filter_by_role() {
    let app = app();
    let (_, body) = send(&app, "GET", "/api/staff?role=Koki", None).await;
    let cooks = body.as_array().unwrap();
    assert_eq!(cooks.len(), 2);
    assert!(cooks.iter().all(|s| s["role"] == "Koki"));
}

#[tokio::test]
async fn available_tables_and_active_payment_methods() {
    let app = app();

    let (_, body) = send(&app, "GET", "/api/tables/available", None).await;
    assert_eq!(body.as_array().unwrap().len(), 6);

    let (_, body) = send(&app, "GET", "/api/payment-methods/active", None).await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn reservations_filter_by_status() {
    let app = app();
    let (_, body) = send(&app, "GET", "/api/reservations?status=Dikonfirmasi", None).await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn manual_order_totals_are_derived() {
    let app = app();
    let (status, order) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "table": "Meja 4",
            "customer": "Tono Sucipto",
            "items": [
                { "name": "Nasi Goreng Spesial", "quantity": 2, "price": 45000.0 },
                { "name": "Es Teh Manis", "quantity": 2, "price": 10000.0 }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // 种子订单到 1005 为止
    assert_eq!(order["id"], 1006);
    assert_eq!(order["subtotal"], 110000.0);
    assert_eq!(order["tax"], 11000.0);
    assert_eq!(order["total"], 121000.0);
    assert_eq!(order["status"], "Menunggu");
}

#[tokio::test]
async fn dashboard_summary_matches_seed_data() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["menu"]["total"], 8);
    assert_eq!(body["menu"]["out_of_stock"], 1);

    assert_eq!(body["tables"]["total"], 10);
    assert_eq!(body["tables"]["occupied"], 4);
    assert_eq!(body["tables"]["occupancy_percent"], 40);

    // VIP 3 / 6 = 50%
    assert_eq!(body["customers"]["vip"], 3);
    assert_eq!(body["customers"]["vip_percent"], 50);
    assert_eq!(body["customers"]["regular_percent"], 50);

    // 职位分组降序，并列保持职位表顺序
    let by_role = body["staff"]["by_role"].as_array().unwrap();
    assert_eq!(by_role[0]["group"], "Admin");
    assert_eq!(by_role[0]["count"], 2);
    assert_eq!(by_role[5]["group"], "Kasir");
    assert_eq!(by_role[5]["count"], 1);

    // 营收只算已完成订单 (1001 + 1003)
    assert_eq!(body["orders"]["revenue"], 224400.0);
}

#[tokio::test]
async fn dashboard_percentages_are_zero_on_empty_collections() {
    let app = empty_app();
    let (status, body) = send(&app, "GET", "/api/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["tables"]["occupancy_percent"], 0);
    assert_eq!(body["customers"]["vip_percent"], 0);
    assert_eq!(body["orders"]["revenue"], 0.0);
}
