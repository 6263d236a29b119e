//! Cart & Checkout API 模块
//!
//! 点餐流程：开购物车 → 加减菜品 → 结账。每个购物车是一条独立
//! 台账，结账成功后生成订单并清空。

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/carts", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{id}", get(handler::get_by_id).delete(handler::discard))
        .route("/{id}/items", post(handler::add_item))
        .route(
            "/{id}/items/{item_id}",
            put(handler::set_quantity).delete(handler::remove_item),
        )
        .route("/{id}/checkout", post(handler::checkout))
}
