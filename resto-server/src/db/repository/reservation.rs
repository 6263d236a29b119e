//! Reservation Repository

use shared::{Reservation, ReservationCreate, ReservationUpdate};

use super::{RepoError, RepoResult, Repository};
use crate::db::Database;

#[derive(Clone)]
pub struct ReservationRepository {
    db: Database,
}

impl ReservationRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl Repository<Reservation, ReservationCreate, ReservationUpdate> for ReservationRepository {
    fn find_all(&self) -> Vec<Reservation> {
        self.db.reservations().all()
    }

    fn find_by_id(&self, id: i64) -> Option<Reservation> {
        self.db.reservations().get(id)
    }

    fn create(&self, data: ReservationCreate) -> RepoResult<Reservation> {
        // A new reservation starts pending unless the dashboard says otherwise
        let reservation = Reservation {
            id: 0,
            name: data.name,
            table: data.table,
            guests: data.guests,
            date: data.date,
            time: data.time,
            status: data.status.unwrap_or_else(|| "Menunggu".to_string()),
            contact: data.contact,
            duration: data.duration.unwrap_or(2),
        };
        Ok(self.db.reservations().insert(reservation))
    }

    fn update(&self, id: i64, data: ReservationUpdate) -> RepoResult<Reservation> {
        self.db
            .reservations()
            .update(id, |reservation| {
                if let Some(name) = data.name {
                    reservation.name = name;
                }
                if let Some(table) = data.table {
                    reservation.table = table;
                }
                if let Some(guests) = data.guests {
                    reservation.guests = guests;
                }
                if let Some(date) = data.date {
                    reservation.date = date;
                }
                if let Some(time) = data.time {
                    reservation.time = time;
                }
                if let Some(status) = data.status {
                    reservation.status = status;
                }
                if let Some(contact) = data.contact {
                    reservation.contact = contact;
                }
                if let Some(duration) = data.duration {
                    reservation.duration = duration;
                }
            })
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }

    fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.db.reservations().remove(id))
    }
}
