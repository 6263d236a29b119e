//! Staff API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::{Staff, StaffCreate, StaffUpdate};

use crate::catalog::{FilterQuery, filter};
use crate::core::ServerState;
use crate::db::repository::{Repository, StaffRepository};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// 员工列表筛选参数
///
/// `role` 为职位等值筛选，`q` 为姓名/邮箱/电话搜索
#[derive(Debug, Default, Deserialize)]
pub struct StaffListQuery {
    pub role: Option<String>,
    pub q: Option<String>,
}

fn staff_search_fields(s: &Staff) -> Vec<String> {
    vec![s.name.clone(), s.email.clone(), s.phone.clone()]
}

/// GET /api/staff - 获取所有员工 (支持职位筛选和搜索)
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<StaffListQuery>,
) -> AppResult<Json<Vec<Staff>>> {
    let repo = StaffRepository::new(state.db.clone());
    let query = FilterQuery::new(params.role.as_deref(), params.q.as_deref());
    let staff = filter::apply(repo.find_all(), &query, |s| &s.role, staff_search_fields);
    Ok(Json(staff))
}

/// GET /api/staff/:id - 获取单个员工
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Staff>> {
    let repo = StaffRepository::new(state.db.clone());
    let staff = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Staff {} not found", id)))?;
    Ok(Json(staff))
}

/// POST /api/staff - 创建员工
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StaffCreate>,
) -> AppResult<Json<Staff>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.role, "role", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.photo, "photo", MAX_URL_LEN)?;

    let repo = StaffRepository::new(state.db.clone());
    let staff = repo.create(payload)?;
    Ok(Json(staff))
}

/// PUT /api/staff/:id - 更新员工
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StaffUpdate>,
) -> AppResult<Json<Staff>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.role, "role", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.photo, "photo", MAX_URL_LEN)?;

    let repo = StaffRepository::new(state.db.clone());
    let staff = repo.update(id, payload)?;
    Ok(Json(staff))
}

/// DELETE /api/staff/:id - 删除员工
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let repo = StaffRepository::new(state.db.clone());
    if !repo.delete(id)? {
        return Err(AppError::not_found(format!("Staff {} not found", id)));
    }
    Ok(Json(true))
}
