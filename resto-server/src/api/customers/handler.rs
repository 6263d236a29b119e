//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::{Customer, CustomerCreate, CustomerUpdate};

use crate::catalog::{FilterQuery, filter};
use crate::core::ServerState;
use crate::db::repository::{CustomerRepository, Repository};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// 顾客列表筛选参数
///
/// `type` 为会员类型等值筛选 (Regular | VIP)，`q` 为姓名/邮箱/电话搜索
#[derive(Debug, Default, Deserialize)]
pub struct CustomerListQuery {
    #[serde(rename = "type")]
    pub customer_type: Option<String>,
    pub q: Option<String>,
}

fn customer_search_fields(c: &Customer) -> Vec<String> {
    vec![c.name.clone(), c.email.clone(), c.phone.clone()]
}

/// GET /api/customers - 获取所有顾客 (支持类型筛选和搜索)
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<CustomerListQuery>,
) -> AppResult<Json<Vec<Customer>>> {
    let repo = CustomerRepository::new(state.db.clone());
    let query = FilterQuery::new(params.customer_type.as_deref(), params.q.as_deref());
    let customers = filter::apply(
        repo.find_all(),
        &query,
        |c| &c.customer_type,
        customer_search_fields,
    );
    Ok(Json(customers))
}

/// GET /api/customers/:id - 获取单个顾客
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Customer>> {
    let repo = CustomerRepository::new(state.db.clone());
    let customer = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Customer {} not found", id)))?;
    Ok(Json(customer))
}

/// POST /api/customers - 创建顾客
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerCreate>,
) -> AppResult<Json<Customer>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.customer_type, "type", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let repo = CustomerRepository::new(state.db.clone());
    let customer = repo.create(payload)?;
    Ok(Json(customer))
}

/// PUT /api/customers/:id - 更新顾客
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CustomerUpdate>,
) -> AppResult<Json<Customer>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let repo = CustomerRepository::new(state.db.clone());
    let customer = repo.update(id, payload)?;
    Ok(Json(customer))
}

/// DELETE /api/customers/:id - 删除顾客
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let repo = CustomerRepository::new(state.db.clone());
    if !repo.delete(id)? {
        return Err(AppError::not_found(format!("Customer {} not found", id)));
    }
    Ok(Json(true))
}
