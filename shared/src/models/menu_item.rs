//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Category label, matched against [`Category::name`](super::Category)
    pub category: String,
    pub price: f64,
    /// Availability status: "Tersedia" | "Habis"
    pub status: String,
    /// Image path or URL shown on the menu card
    #[serde(default)]
    pub image: String,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub status: Option<String>,
    pub image: Option<String>,
}

/// Update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub status: Option<String>,
    pub image: Option<String>,
}
