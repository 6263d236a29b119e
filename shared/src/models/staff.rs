//! Staff Model

use serde::{Deserialize, Serialize};

/// Staff roles shown in the dashboard summary, in display order
pub const STAFF_ROLES: &[&str] = &["Admin", "Developer", "Manajer", "Kasir", "Pelayan", "Koki"];

/// Staff member entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// One of [`STAFF_ROLES`]
    pub role: String,
    pub join_date: String,
    /// Employment status: "Aktif" | "Tidak Aktif"
    pub status: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub photo: String,
}

/// Create staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub join_date: Option<String>,
    pub status: Option<String>,
    pub address: Option<String>,
    pub photo: Option<String>,
}

/// Update staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub join_date: Option<String>,
    pub status: Option<String>,
    pub address: Option<String>,
    pub photo: Option<String>,
}
