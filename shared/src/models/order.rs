//! Order Model

use serde::{Deserialize, Serialize};

/// Order statuses, in display order
pub const ORDER_STATUSES: &[&str] = &["Menunggu", "Diproses", "Selesai"];

/// A line on a placed order: name and unit price frozen at order time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

/// Placed order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub table: String,
    pub customer: String,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    /// One of [`ORDER_STATUSES`]
    pub status: String,
    pub date: String,
    pub time: String,
    /// Payment kind recorded at checkout, if the order came through one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<String>,
}

/// Create order payload (dashboard manual entry)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table: String,
    pub customer: String,
    pub items: Vec<OrderItem>,
    pub status: Option<String>,
}

/// Update order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub table: Option<String>,
    pub customer: Option<String>,
    pub status: Option<String>,
}
