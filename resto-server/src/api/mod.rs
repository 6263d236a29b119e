//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`menu`] - 菜单管理接口
//! - [`categories`] - 分类管理接口
//! - [`tables`] - 桌台管理接口
//! - [`staff`] - 员工管理接口
//! - [`customers`] - 顾客管理接口
//! - [`payment_methods`] - 支付方式管理接口
//! - [`reservations`] - 预订管理接口
//! - [`orders`] - 订单管理接口
//! - [`carts`] - 购物车与结账接口
//! - [`dashboard`] - 仪表盘汇总接口

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod carts;
pub mod categories;
pub mod customers;
pub mod dashboard;
pub mod health;
pub mod menu;
pub mod orders;
pub mod payment_methods;
pub mod reservations;
pub mod staff;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Dashboard entity management
        .merge(menu::router())
        .merge(categories::router())
        .merge(tables::router())
        .merge(staff::router())
        .merge(customers::router())
        .merge(payment_methods::router())
        .merge(reservations::router())
        .merge(orders::router())
        // Summary cards
        .merge(dashboard::router())
        // Customer ordering flow
        .merge(carts::router())
        // Health API - public route
        .merge(health::router())
}

/// Build a fully configured application with all middleware
pub fn build_app() -> Router<ServerState> {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
}
