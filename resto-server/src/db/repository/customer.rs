//! Customer Repository

use shared::{Customer, CustomerCreate, CustomerUpdate};

use super::{RepoError, RepoResult, Repository};
use crate::db::Database;

#[derive(Clone)]
pub struct CustomerRepository {
    db: Database,
}

impl CustomerRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_by_email(&self, email: &str) -> Option<Customer> {
        self.db.customers().find(|c| c.email == email)
    }
}

impl Repository<Customer, CustomerCreate, CustomerUpdate> for CustomerRepository {
    fn find_all(&self) -> Vec<Customer> {
        self.db.customers().all()
    }

    fn find_by_id(&self, id: i64) -> Option<Customer> {
        self.db.customers().get(id)
    }

    fn create(&self, data: CustomerCreate) -> RepoResult<Customer> {
        if self.find_by_email(&data.email).is_some() {
            return Err(RepoError::Duplicate(format!(
                "Customer with email '{}' already exists",
                data.email
            )));
        }

        // New customers start with no visit history
        let customer = Customer {
            id: 0,
            name: data.name,
            email: data.email,
            phone: data.phone,
            customer_type: data.customer_type,
            visits: 0,
            last_visit: "-".to_string(),
            points: 0,
            notes: data.notes.unwrap_or_default(),
        };
        Ok(self.db.customers().insert(customer))
    }

    fn update(&self, id: i64, data: CustomerUpdate) -> RepoResult<Customer> {
        if let Some(email) = &data.email
            && let Some(found) = self.find_by_email(email)
            && found.id != id
        {
            return Err(RepoError::Duplicate(format!(
                "Customer with email '{}' already exists",
                email
            )));
        }

        self.db
            .customers()
            .update(id, |customer| {
                if let Some(name) = data.name {
                    customer.name = name;
                }
                if let Some(email) = data.email {
                    customer.email = email;
                }
                if let Some(phone) = data.phone {
                    customer.phone = phone;
                }
                if let Some(customer_type) = data.customer_type {
                    customer.customer_type = customer_type;
                }
                if let Some(notes) = data.notes {
                    customer.notes = notes;
                }
            })
            .ok_or_else(|| RepoError::NotFound(format!("Customer {} not found", id)))
    }

    fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.db.customers().remove(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_customer_gets_visit_defaults() {
        let repo = CustomerRepository::new(Database::new());
        let created = repo
            .create(CustomerCreate {
                name: "Tono Sucipto".to_string(),
                email: "tono@example.com".to_string(),
                phone: "081234567899".to_string(),
                customer_type: "Regular".to_string(),
                notes: None,
            })
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.visits, 0);
        assert_eq!(created.last_visit, "-");
        assert_eq!(created.points, 0);
        assert_eq!(created.notes, "");
    }

    #[test]
    fn update_keeps_visit_history() {
        let repo = CustomerRepository::new(Database::seeded());
        let updated = repo
            .update(
                2,
                CustomerUpdate {
                    name: None,
                    email: None,
                    phone: None,
                    customer_type: Some("Regular".to_string()),
                    notes: None,
                },
            )
            .unwrap();

        // Type changed; visits/points untouched
        assert_eq!(updated.customer_type, "Regular");
        assert_eq!(updated.visits, 25);
        assert_eq!(updated.points, 350);
    }
}
