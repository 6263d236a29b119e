//! Dashboard Summary Handler
//!
//! 仪表盘顶部汇总卡片的全部数字由这一个接口产出。所有计数和
//! 百分比都来自聚合模块；空集合的百分比固定为 0。

use axum::{Json, extract::State};
use serde::Serialize;

use shared::{ORDER_STATUSES, RESERVATION_STATUSES, STAFF_ROLES};

use crate::cart::{to_decimal, to_f64};
use crate::catalog::{GroupCount, count_by_group, count_where, percentage};
use crate::core::ServerState;
use crate::utils::AppResult;

/// 菜单汇总卡片
#[derive(Debug, Serialize)]
pub struct MenuSummary {
    pub total: usize,
    pub available: usize,
    pub out_of_stock: usize,
}

/// 桌台汇总卡片
#[derive(Debug, Serialize)]
pub struct TableSummary {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    /// 上座率 (百分比，空集合为 0)
    pub occupancy_percent: u32,
}

/// 员工汇总卡片
#[derive(Debug, Serialize)]
pub struct StaffSummary {
    pub total: usize,
    pub active: usize,
    /// 按职位分组计数，降序排列 (并列保持职位表顺序)
    pub by_role: Vec<GroupCount>,
}

/// 顾客汇总卡片
#[derive(Debug, Serialize)]
pub struct CustomerSummary {
    pub total: usize,
    pub vip: usize,
    pub vip_percent: u32,
    pub regular: usize,
    pub regular_percent: u32,
}

/// 预订汇总卡片
#[derive(Debug, Serialize)]
pub struct ReservationSummary {
    pub total: usize,
    pub by_status: Vec<GroupCount>,
}

/// 订单汇总卡片
#[derive(Debug, Serialize)]
pub struct OrderSummary {
    pub total: usize,
    pub by_status: Vec<GroupCount>,
    /// 已完成订单的营收合计
    pub revenue: f64,
}

/// 仪表盘汇总响应
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub menu: MenuSummary,
    pub tables: TableSummary,
    pub staff: StaffSummary,
    pub customers: CustomerSummary,
    pub reservations: ReservationSummary,
    pub orders: OrderSummary,
}

/// GET /api/dashboard - 仪表盘汇总
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<DashboardSummary>> {
    let menu_items = state.db.menu_items().all();
    let tables = state.db.dining_tables().all();
    let staff = state.db.staff().all();
    let customers = state.db.customers().all();
    let reservations = state.db.reservations().all();
    let orders = state.db.orders().all();

    let available_tables = count_where(&tables, |t| t.status == "Tersedia");
    let occupied_tables = count_where(&tables, |t| t.status == "Terisi");
    let vip = count_where(&customers, |c| c.customer_type == "VIP");
    let regular = count_where(&customers, |c| c.customer_type == "Regular");

    // 营收按十进制累加后再转回 f64
    let revenue: rust_decimal::Decimal = orders
        .iter()
        .filter(|o| o.status == "Selesai")
        .map(|o| to_decimal(o.total))
        .sum();

    Ok(Json(DashboardSummary {
        menu: MenuSummary {
            total: menu_items.len(),
            available: count_where(&menu_items, |m| m.status == "Tersedia"),
            out_of_stock: count_where(&menu_items, |m| m.status == "Habis"),
        },
        tables: TableSummary {
            total: tables.len(),
            available: available_tables,
            occupied: occupied_tables,
            occupancy_percent: percentage(occupied_tables, tables.len()),
        },
        staff: StaffSummary {
            total: staff.len(),
            active: count_where(&staff, |s| s.status == "Aktif"),
            by_role: count_by_group(&staff, STAFF_ROLES, |s| &s.role),
        },
        customers: CustomerSummary {
            total: customers.len(),
            vip,
            vip_percent: percentage(vip, customers.len()),
            regular,
            regular_percent: percentage(regular, customers.len()),
        },
        reservations: ReservationSummary {
            total: reservations.len(),
            by_status: count_by_group(&reservations, RESERVATION_STATUSES, |r| &r.status),
        },
        orders: OrderSummary {
            total: orders.len(),
            by_status: count_by_group(&orders, ORDER_STATUSES, |o| &o.status),
            revenue: to_f64(revenue),
        },
    }))
}
