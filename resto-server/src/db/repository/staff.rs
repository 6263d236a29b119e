//! Staff Repository

use shared::{Staff, StaffCreate, StaffUpdate};

use super::{RepoError, RepoResult, Repository};
use crate::db::Database;

#[derive(Clone)]
pub struct StaffRepository {
    db: Database,
}

impl StaffRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_by_email(&self, email: &str) -> Option<Staff> {
        self.db.staff().find(|s| s.email == email)
    }
}

impl Repository<Staff, StaffCreate, StaffUpdate> for StaffRepository {
    fn find_all(&self) -> Vec<Staff> {
        self.db.staff().all()
    }

    fn find_by_id(&self, id: i64) -> Option<Staff> {
        self.db.staff().get(id)
    }

    fn create(&self, data: StaffCreate) -> RepoResult<Staff> {
        if self.find_by_email(&data.email).is_some() {
            return Err(RepoError::Duplicate(format!(
                "Staff with email '{}' already exists",
                data.email
            )));
        }

        let member = Staff {
            id: 0,
            name: data.name,
            email: data.email,
            phone: data.phone,
            role: data.role,
            join_date: data
                .join_date
                .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string()),
            status: data.status.unwrap_or_else(|| "Aktif".to_string()),
            address: data.address.unwrap_or_default(),
            photo: data
                .photo
                .unwrap_or_else(|| "/placeholder.svg".to_string()),
        };
        Ok(self.db.staff().insert(member))
    }

    fn update(&self, id: i64, data: StaffUpdate) -> RepoResult<Staff> {
        if let Some(email) = &data.email
            && let Some(found) = self.find_by_email(email)
            && found.id != id
        {
            return Err(RepoError::Duplicate(format!(
                "Staff with email '{}' already exists",
                email
            )));
        }

        self.db
            .staff()
            .update(id, |member| {
                if let Some(name) = data.name {
                    member.name = name;
                }
                if let Some(email) = data.email {
                    member.email = email;
                }
                if let Some(phone) = data.phone {
                    member.phone = phone;
                }
                if let Some(role) = data.role {
                    member.role = role;
                }
                if let Some(join_date) = data.join_date {
                    member.join_date = join_date;
                }
                if let Some(status) = data.status {
                    member.status = status;
                }
                if let Some(address) = data.address {
                    member.address = address;
                }
                if let Some(photo) = data.photo {
                    member.photo = photo;
                }
            })
            .ok_or_else(|| RepoError::NotFound(format!("Staff {} not found", id)))
    }

    fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.db.staff().remove(id))
    }
}
