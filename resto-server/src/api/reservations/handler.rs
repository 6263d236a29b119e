//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::{Reservation, ReservationCreate, ReservationUpdate};

use crate::catalog::{FilterQuery, filter};
use crate::core::ServerState;
use crate::db::repository::{Repository, ReservationRepository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_positive,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// 预订列表筛选参数
///
/// `status` 为状态等值筛选，`q` 为姓名/桌号/联系方式搜索
#[derive(Debug, Default, Deserialize)]
pub struct ReservationListQuery {
    pub status: Option<String>,
    pub q: Option<String>,
}

fn reservation_search_fields(r: &Reservation) -> Vec<String> {
    vec![r.name.clone(), r.table.clone(), r.contact.clone()]
}

/// GET /api/reservations - 获取所有预订 (支持状态筛选和搜索)
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ReservationListQuery>,
) -> AppResult<Json<Vec<Reservation>>> {
    let repo = ReservationRepository::new(state.db.clone());
    let query = FilterQuery::new(params.status.as_deref(), params.q.as_deref());
    let reservations = filter::apply(
        repo.find_all(),
        &query,
        |r| &r.status,
        reservation_search_fields,
    );
    Ok(Json(reservations))
}

/// GET /api/reservations/:id - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Reservation>> {
    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))?;
    Ok(Json(reservation))
}

/// POST /api/reservations - 创建预订
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.table, "table", MAX_NAME_LEN)?;
    validate_required_text(&payload.date, "date", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.time, "time", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.contact, "contact", MAX_SHORT_TEXT_LEN)?;
    validate_positive(payload.guests, "guests")?;
    if let Some(duration) = payload.duration {
        validate_positive(duration, "duration")?;
    }

    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo.create(payload)?;
    Ok(Json(reservation))
}

/// PUT /api/reservations/:id - 更新预订
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<Json<Reservation>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.table, "table", MAX_NAME_LEN)?;
    validate_optional_text(&payload.date, "date", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.time, "time", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.contact, "contact", MAX_SHORT_TEXT_LEN)?;
    if let Some(guests) = payload.guests {
        validate_positive(guests, "guests")?;
    }
    if let Some(duration) = payload.duration {
        validate_positive(duration, "duration")?;
    }

    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo.update(id, payload)?;
    Ok(Json(reservation))
}

/// DELETE /api/reservations/:id - 删除预订
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let repo = ReservationRepository::new(state.db.clone());
    if !repo.delete(id)? {
        return Err(AppError::not_found(format!("Reservation {} not found", id)));
    }
    Ok(Json(true))
}
