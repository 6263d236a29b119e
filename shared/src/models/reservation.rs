//! Reservation Model

use serde::{Deserialize, Serialize};

/// Reservation statuses, in display order
pub const RESERVATION_STATUSES: &[&str] = &["Menunggu", "Dikonfirmasi", "Dibatalkan"];

/// Table reservation entity (reservasi)
///
/// `table` is the display number of a dining table, kept as a plain
/// label; it is not validated against the table collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    /// Name the reservation is under
    pub name: String,
    pub table: String,
    pub guests: i32,
    pub date: String,
    pub time: String,
    /// One of [`RESERVATION_STATUSES`]
    pub status: String,
    pub contact: String,
    /// Duration in hours
    pub duration: i32,
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub name: String,
    pub table: String,
    pub guests: i32,
    pub date: String,
    pub time: String,
    pub status: Option<String>,
    pub contact: String,
    pub duration: Option<i32>,
}

/// Update reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationUpdate {
    pub name: Option<String>,
    pub table: Option<String>,
    pub guests: Option<i32>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub status: Option<String>,
    pub contact: Option<String>,
    pub duration: Option<i32>,
}
