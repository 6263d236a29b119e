//! Cart & Checkout API Handlers
//!
//! 单价在加入购物车时从菜单快照，之后菜单改价不影响已开的购物车。
//! 结账把台账冻结成订单行，总额由台账推导。

use std::time::Duration;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::{Order, PaymentKind};

use crate::cart::{Cart, CartLine, CartTotals};
use crate::core::ServerState;
use crate::db::repository::{MenuItemRepository, OrderRepository, Repository};
use crate::payment::{PaymentError, PaymentReceipt};
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult};

/// 购物车视图：行 + 实时推导的合计
#[derive(Debug, Serialize)]
pub struct CartView {
    pub id: Uuid,
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

/// 新购物车响应
#[derive(Debug, Serialize)]
pub struct CartCreated {
    pub id: Uuid,
}

/// 加菜请求
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub menu_item_id: i64,
}

/// 改量请求 (quantity < 1 等价于删行)
#[derive(Debug, Deserialize)]
pub struct SetQuantityRequest {
    pub quantity: i32,
}

/// 结账请求
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub method: PaymentKind,
    pub table: Option<String>,
    pub customer: Option<String>,
}

/// 结账响应：生成的订单 + 网关回执
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub order: Order,
    pub receipt: PaymentReceipt,
}

fn view(state: &ServerState, id: Uuid) -> AppResult<CartView> {
    let cart = state
        .carts
        .get(&id)
        .ok_or_else(|| AppError::not_found(format!("Cart {} not found", id)))?;
    Ok(cart_view(id, &cart, state.config.tax_rate_percent))
}

fn cart_view(id: Uuid, cart: &Cart, tax_rate_percent: u32) -> CartView {
    CartView {
        id,
        lines: cart.lines().to_vec(),
        totals: cart.totals(tax_rate_percent),
    }
}

/// POST /api/carts - 开一个空购物车
pub async fn create(State(state): State<ServerState>) -> AppResult<Json<CartCreated>> {
    let id = state.carts.create();
    Ok(Json(CartCreated { id }))
}

/// GET /api/carts/:id - 查看购物车
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CartView>> {
    Ok(Json(view(&state, id)?))
}

/// DELETE /api/carts/:id - 丢弃购物车
pub async fn discard(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<bool>> {
    if !state.carts.remove(&id) {
        return Err(AppError::not_found(format!("Cart {} not found", id)));
    }
    Ok(Json(true))
}

/// POST /api/carts/:id/items - 加一份菜品
///
/// 已有同一菜品时数量 +1，否则以当前菜单单价新增一行。售罄菜品
/// 直接拒绝。
pub async fn add_item(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddItemRequest>,
) -> AppResult<Json<CartView>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.find_by_id(payload.menu_item_id).ok_or_else(|| {
        AppError::not_found(format!("Menu item {} not found", payload.menu_item_id))
    })?;
    if item.status == "Habis" {
        return Err(AppError::business_rule(format!(
            "'{}' is out of stock",
            item.name
        )));
    }

    state
        .carts
        .with_cart(&id, |cart| {
            cart.add_or_increment(item.id, &item.name, item.price)
        })
        .ok_or_else(|| AppError::not_found(format!("Cart {} not found", id)))?;

    Ok(Json(view(&state, id)?))
}

/// PUT /api/carts/:id/items/:item_id - 覆写某行数量
pub async fn set_quantity(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(Uuid, i64)>,
    Json(payload): Json<SetQuantityRequest>,
) -> AppResult<Json<CartView>> {
    state
        .carts
        .with_cart(&id, |cart| cart.set_quantity(item_id, payload.quantity))
        .ok_or_else(|| AppError::not_found(format!("Cart {} not found", id)))?;

    Ok(Json(view(&state, id)?))
}

/// DELETE /api/carts/:id/items/:item_id - 删行 (不存在则静默跳过)
pub async fn remove_item(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(Uuid, i64)>,
) -> AppResult<Json<CartView>> {
    state
        .carts
        .with_cart(&id, |cart| cart.remove(item_id))
        .ok_or_else(|| AppError::not_found(format!("Cart {} not found", id)))?;

    Ok(Json(view(&state, id)?))
}

/// POST /api/carts/:id/checkout - 结账
///
/// 空购物车不能结账。网关确认成功后把台账冻结成订单、清空购物车；
/// 确认超时或网关故障时购物车原样保留，可重试。
pub async fn checkout(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<CheckoutResponse>> {
    validate_optional_text(&payload.table, "table", MAX_NAME_LEN)?;
    validate_optional_text(&payload.customer, "customer", MAX_NAME_LEN)?;

    let cart = state
        .carts
        .get(&id)
        .ok_or_else(|| AppError::not_found(format!("Cart {} not found", id)))?;
    if cart.is_empty() {
        return Err(AppError::business_rule("Cannot check out an empty cart"));
    }

    let totals = cart.totals(state.config.tax_rate_percent);

    let timeout = Duration::from_millis(state.config.payment_timeout_ms);
    let receipt = tokio::time::timeout(timeout, state.payment.confirm(payload.method, totals.total))
        .await
        .map_err(|_| AppError::internal("Payment confirmation timed out"))?
        .map_err(|e| match e {
            PaymentError::Declined(msg) => AppError::business_rule(msg),
            PaymentError::Unavailable(msg) => AppError::internal(msg),
        })?;

    let now = chrono::Local::now();
    let order = Order {
        id: 0,
        table: payload.table.unwrap_or_else(|| "-".to_string()),
        customer: payload.customer.unwrap_or_else(|| "Pelanggan".to_string()),
        items: cart.to_order_items(),
        subtotal: totals.subtotal,
        tax: totals.tax,
        total: totals.total,
        status: "Menunggu".to_string(),
        date: now.format("%-d %B %Y").to_string(),
        time: now.format("%H:%M").to_string(),
        payment: Some(payload.method.to_string()),
    };
    let order = OrderRepository::new(state.db.clone()).insert(order);

    // 结账成功才清空；失败路径上面已经提前返回
    state.carts.with_cart(&id, |cart| cart.clear());

    tracing::info!(order_id = order.id, total = order.total, method = %payload.method, "Checkout completed");

    Ok(Json(CheckoutResponse { order, receipt }))
}
