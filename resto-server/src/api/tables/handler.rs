//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::{DiningTable, DiningTableCreate, DiningTableUpdate};

use crate::catalog::{FilterQuery, filter};
use crate::core::ServerState;
use crate::db::repository::{DiningTableRepository, Repository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_positive,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// 桌台列表筛选参数
///
/// `location` 为区域等值筛选，`q` 为桌号搜索
#[derive(Debug, Default, Deserialize)]
pub struct TableListQuery {
    pub location: Option<String>,
    pub q: Option<String>,
}

/// GET /api/tables - 获取所有桌台 (支持区域筛选)
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<TableListQuery>,
) -> AppResult<Json<Vec<DiningTable>>> {
    let repo = DiningTableRepository::new(state.db.clone());
    let query = FilterQuery::new(params.location.as_deref(), params.q.as_deref());
    let tables = filter::apply(repo.find_all(), &query, |t| &t.location, |t| {
        vec![t.number.clone()]
    });
    Ok(Json(tables))
}

/// GET /api/tables/available - 获取空闲桌台 (结账选桌用)
pub async fn list_available(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<DiningTable>>> {
    let repo = DiningTableRepository::new(state.db.clone());
    Ok(Json(repo.find_available()))
}

/// GET /api/tables/:id - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.db.clone());
    let table = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", id)))?;
    Ok(Json(table))
}

/// POST /api/tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    validate_required_text(&payload.number, "number", MAX_NAME_LEN)?;
    validate_required_text(&payload.location, "location", MAX_SHORT_TEXT_LEN)?;
    if let Some(capacity) = payload.capacity {
        validate_positive(capacity, "capacity")?;
    }

    let repo = DiningTableRepository::new(state.db.clone());
    let table = repo.create(payload)?;
    Ok(Json(table))
}

/// PUT /api/tables/:id - 更新桌台
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    validate_optional_text(&payload.number, "number", MAX_NAME_LEN)?;
    validate_optional_text(&payload.location, "location", MAX_SHORT_TEXT_LEN)?;
    if let Some(capacity) = payload.capacity {
        validate_positive(capacity, "capacity")?;
    }

    let repo = DiningTableRepository::new(state.db.clone());
    let table = repo.update(id, payload)?;
    Ok(Json(table))
}

/// DELETE /api/tables/:id - 删除桌台
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let repo = DiningTableRepository::new(state.db.clone());
    if !repo.delete(id)? {
        return Err(AppError::not_found(format!("Table {} not found", id)));
    }
    Ok(Json(true))
}
