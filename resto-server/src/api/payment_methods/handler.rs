//! Payment Method API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::{PaymentMethod, PaymentMethodCreate, PaymentMethodUpdate};

use crate::core::ServerState;
use crate::db::repository::{PaymentMethodRepository, Repository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/payment-methods - 获取所有支付方式
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<PaymentMethod>>> {
    let repo = PaymentMethodRepository::new(state.db.clone());
    Ok(Json(repo.find_all()))
}

/// GET /api/payment-methods/active - 获取启用的支付方式 (结账用)
pub async fn list_active(State(state): State<ServerState>) -> AppResult<Json<Vec<PaymentMethod>>> {
    let repo = PaymentMethodRepository::new(state.db.clone());
    Ok(Json(repo.find_active()))
}

/// GET /api/payment-methods/:id - 获取单个支付方式
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PaymentMethod>> {
    let repo = PaymentMethodRepository::new(state.db.clone());
    let method = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Payment method {} not found", id)))?;
    Ok(Json(method))
}

/// POST /api/payment-methods - 创建支付方式
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PaymentMethodCreate>,
) -> AppResult<Json<PaymentMethod>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.color, "color", MAX_SHORT_TEXT_LEN)?;

    let repo = PaymentMethodRepository::new(state.db.clone());
    let method = repo.create(payload)?;
    Ok(Json(method))
}

/// PUT /api/payment-methods/:id - 更新支付方式
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PaymentMethodUpdate>,
) -> AppResult<Json<PaymentMethod>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.color, "color", MAX_SHORT_TEXT_LEN)?;

    let repo = PaymentMethodRepository::new(state.db.clone());
    let method = repo.update(id, payload)?;
    Ok(Json(method))
}

/// DELETE /api/payment-methods/:id - 删除支付方式
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let repo = PaymentMethodRepository::new(state.db.clone());
    if !repo.delete(id)? {
        return Err(AppError::not_found(format!(
            "Payment method {} not found",
            id
        )));
    }
    Ok(Json(true))
}
