//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::{MenuItem, MenuItemCreate, MenuItemUpdate};

use crate::catalog::{FilterQuery, filter};
use crate::core::ServerState;
use crate::db::repository::{MenuItemRepository, Repository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_price, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// 菜单列表筛选参数
///
/// `category` 为等值筛选 ("Semua" 表示不过滤)，`q` 为名称模糊搜索
#[derive(Debug, Default, Deserialize)]
pub struct MenuListQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

/// GET /api/menu - 获取菜单 (支持分类筛选和搜索)
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<MenuListQuery>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let query = FilterQuery::new(params.category.as_deref(), params.q.as_deref());
    let items = filter::apply(repo.find_all(), &query, |m| &m.category, |m| {
        vec![m.name.clone()]
    });
    Ok(Json(items))
}

/// GET /api/menu/:id - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuItem>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", id)))?;
    Ok(Json(item))
}

/// POST /api/menu - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.category, "category", MAX_NAME_LEN)?;
    validate_price(payload.price, "price")?;
    validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.create(payload)?;
    Ok(Json(item))
}

/// PUT /api/menu/:id - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.category, "category", MAX_NAME_LEN)?;
    validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;
    if let Some(price) = payload.price {
        validate_price(price, "price")?;
    }

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.update(id, payload)?;
    Ok(Json(item))
}

/// DELETE /api/menu/:id - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let repo = MenuItemRepository::new(state.db.clone());
    if !repo.delete(id)? {
        return Err(AppError::not_found(format!("Menu item {} not found", id)));
    }
    Ok(Json(true))
}
