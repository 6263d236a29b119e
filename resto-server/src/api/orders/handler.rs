//! Order API Handlers
//!
//! 订单总额一律通过购物车台账重新推导，不信任请求体里的金额。

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::{Order, OrderCreate, OrderUpdate};

use crate::catalog::{FilterQuery, filter};
use crate::core::ServerState;
use crate::db::repository::{OrderRepository, Repository};
use crate::utils::validation::{
    MAX_NAME_LEN, validate_optional_text, validate_positive, validate_price,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// 订单列表筛选参数
///
/// `status` 为状态等值筛选，`q` 为顾客/桌号/订单号搜索
#[derive(Debug, Default, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<String>,
    pub q: Option<String>,
}

fn order_search_fields(o: &Order) -> Vec<String> {
    vec![o.customer.clone(), o.table.clone(), o.id.to_string()]
}

/// GET /api/orders - 获取所有订单 (支持状态筛选和搜索)
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<OrderListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let query = FilterQuery::new(params.status.as_deref(), params.q.as_deref());
    let orders = filter::apply(repo.find_all(), &query, |o| &o.status, order_search_fields);
    Ok(Json(orders))
}

/// GET /api/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    Ok(Json(order))
}

/// POST /api/orders - 手工录入订单 (仪表盘)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    validate_required_text(&payload.table, "table", MAX_NAME_LEN)?;
    validate_required_text(&payload.customer, "customer", MAX_NAME_LEN)?;
    if payload.items.is_empty() {
        return Err(AppError::validation("items must not be empty"));
    }
    for item in &payload.items {
        validate_required_text(&item.name, "item name", MAX_NAME_LEN)?;
        validate_price(item.price, "item price")?;
        validate_positive(item.quantity, "item quantity")?;
    }

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create_with_tax_rate(payload, state.config.tax_rate_percent);
    Ok(Json(order))
}

/// PUT /api/orders/:id - 更新订单 (桌号/顾客/状态)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<Json<Order>> {
    validate_optional_text(&payload.table, "table", MAX_NAME_LEN)?;
    validate_optional_text(&payload.customer, "customer", MAX_NAME_LEN)?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.update(id, payload)?;
    Ok(Json(order))
}

/// DELETE /api/orders/:id - 删除订单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let repo = OrderRepository::new(state.db.clone());
    if !repo.delete(id)? {
        return Err(AppError::not_found(format!("Order {} not found", id)));
    }
    Ok(Json(true))
}
