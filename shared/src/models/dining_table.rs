//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity (meja)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    /// Display number, e.g. "Meja 3" or "VIP 1"
    pub number: String,
    pub capacity: i32,
    /// Occupancy status: "Tersedia" | "Terisi"
    pub status: String,
    /// Location zone: "Indoor" | "Outdoor" | "VIP" | "Rooftop"
    pub location: String,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub number: String,
    pub capacity: Option<i32>,
    pub status: Option<String>,
    pub location: String,
}

/// Update dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    pub number: Option<String>,
    pub capacity: Option<i32>,
    pub status: Option<String>,
    pub location: Option<String>,
}
