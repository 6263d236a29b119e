//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer entity (pelanggan)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Membership type: "Regular" | "VIP"
    #[serde(rename = "type")]
    pub customer_type: String,
    pub visits: i32,
    /// Last visit date, or "-" for a customer who has never visited
    pub last_visit: String,
    pub points: i32,
    #[serde(default)]
    pub notes: String,
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub customer_type: String,
    pub notes: Option<String>,
}

/// Update customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "type")]
    pub customer_type: Option<String>,
    pub notes: Option<String>,
}
