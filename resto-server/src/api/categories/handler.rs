//! Category API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::{Category, CategoryCreate, CategoryUpdate};

use crate::catalog::{FilterQuery, filter};
use crate::core::ServerState;
use crate::db::repository::{CategoryRepository, Repository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct CategoryListQuery {
    pub q: Option<String>,
}

/// GET /api/categories - 获取所有分类 (支持搜索)
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<CategoryListQuery>,
) -> AppResult<Json<Vec<Category>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let query = FilterQuery::new(None, params.q.as_deref());
    let categories = filter::apply(repo.find_all(), &query, |c| &c.name, |c| {
        vec![c.name.clone(), c.description.clone()]
    });
    Ok(Json(categories))
}

/// GET /api/categories/:id - 获取单个分类
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Category>> {
    let repo = CategoryRepository::new(state.db.clone());
    let category = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Category {} not found", id)))?;
    Ok(Json(category))
}

/// POST /api/categories - 创建分类
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.color, "color", MAX_SHORT_TEXT_LEN)?;

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.create(payload)?;
    Ok(Json(category))
}

/// PUT /api/categories/:id - 更新分类
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.color, "color", MAX_SHORT_TEXT_LEN)?;

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.update(id, payload)?;
    Ok(Json(category))
}

/// DELETE /api/categories/:id - 删除分类
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let repo = CategoryRepository::new(state.db.clone());
    if !repo.delete(id)? {
        return Err(AppError::not_found(format!("Category {} not found", id)));
    }
    Ok(Json(true))
}
