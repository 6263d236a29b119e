//! Dining Table Repository

use shared::{DiningTable, DiningTableCreate, DiningTableUpdate};

use super::{RepoError, RepoResult, Repository};
use crate::db::Database;

#[derive(Clone)]
pub struct DiningTableRepository {
    db: Database,
}

impl DiningTableRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Find a table by its display number, e.g. "Meja 3"
    pub fn find_by_number(&self, number: &str) -> Option<DiningTable> {
        self.db.dining_tables().find(|t| t.number == number)
    }

    /// Tables currently available for seating
    pub fn find_available(&self) -> Vec<DiningTable> {
        let mut tables = self.db.dining_tables().all();
        tables.retain(|t| t.status == "Tersedia");
        tables
    }
}

impl Repository<DiningTable, DiningTableCreate, DiningTableUpdate> for DiningTableRepository {
    fn find_all(&self) -> Vec<DiningTable> {
        self.db.dining_tables().all()
    }

    fn find_by_id(&self, id: i64) -> Option<DiningTable> {
        self.db.dining_tables().get(id)
    }

    fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        if self.find_by_number(&data.number).is_some() {
            return Err(RepoError::Duplicate(format!(
                "Table '{}' already exists",
                data.number
            )));
        }

        let table = DiningTable {
            id: 0,
            number: data.number,
            capacity: data.capacity.unwrap_or(4),
            status: data.status.unwrap_or_else(|| "Tersedia".to_string()),
            location: data.location,
        };
        Ok(self.db.dining_tables().insert(table))
    }

    fn update(&self, id: i64, data: DiningTableUpdate) -> RepoResult<DiningTable> {
        if let Some(number) = &data.number
            && let Some(found) = self.find_by_number(number)
            && found.id != id
        {
            return Err(RepoError::Duplicate(format!(
                "Table '{}' already exists",
                number
            )));
        }

        self.db
            .dining_tables()
            .update(id, |table| {
                if let Some(number) = data.number {
                    table.number = number;
                }
                if let Some(capacity) = data.capacity {
                    table.capacity = capacity;
                }
                if let Some(status) = data.status {
                    table.status = status;
                }
                if let Some(location) = data.location {
                    table.location = location;
                }
            })
            .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", id)))
    }

    fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.db.dining_tables().remove(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_tables_excludes_occupied() {
        let repo = DiningTableRepository::new(Database::seeded());
        let available = repo.find_available();
        // 6 of the 10 seeded tables are "Tersedia"
        assert_eq!(available.len(), 6);
        assert!(available.iter().all(|t| t.status == "Tersedia"));
    }

    #[test]
    fn duplicate_number_is_rejected() {
        let repo = DiningTableRepository::new(Database::seeded());
        let err = repo
            .create(DiningTableCreate {
                number: "Meja 1".to_string(),
                capacity: Some(4),
                status: None,
                location: "Indoor".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }
}
