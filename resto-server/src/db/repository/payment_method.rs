//! Payment Method Repository

use shared::{PaymentMethod, PaymentMethodCreate, PaymentMethodUpdate};

use super::{RepoError, RepoResult, Repository};
use crate::db::Database;

#[derive(Clone)]
pub struct PaymentMethodRepository {
    db: Database,
}

impl PaymentMethodRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_by_name(&self, name: &str) -> Option<PaymentMethod> {
        self.db.payment_methods().find(|m| m.name == name)
    }

    /// Methods currently offered at checkout
    pub fn find_active(&self) -> Vec<PaymentMethod> {
        let mut methods = self.db.payment_methods().all();
        methods.retain(|m| m.active);
        methods
    }
}

impl Repository<PaymentMethod, PaymentMethodCreate, PaymentMethodUpdate>
    for PaymentMethodRepository
{
    fn find_all(&self) -> Vec<PaymentMethod> {
        self.db.payment_methods().all()
    }

    fn find_by_id(&self, id: i64) -> Option<PaymentMethod> {
        self.db.payment_methods().get(id)
    }

    fn create(&self, data: PaymentMethodCreate) -> RepoResult<PaymentMethod> {
        if self.find_by_name(&data.name).is_some() {
            return Err(RepoError::Duplicate(format!(
                "Payment method '{}' already exists",
                data.name
            )));
        }

        let method = PaymentMethod {
            id: 0,
            name: data.name,
            description: data.description.unwrap_or_default(),
            active: data.active.unwrap_or(true),
            icon: data.icon.unwrap_or_default(),
            color: data
                .color
                .unwrap_or_else(|| "bg-gray-100 text-gray-800".to_string()),
        };
        Ok(self.db.payment_methods().insert(method))
    }

    fn update(&self, id: i64, data: PaymentMethodUpdate) -> RepoResult<PaymentMethod> {
        if let Some(name) = &data.name
            && let Some(found) = self.find_by_name(name)
            && found.id != id
        {
            return Err(RepoError::Duplicate(format!(
                "Payment method '{}' already exists",
                name
            )));
        }

        self.db
            .payment_methods()
            .update(id, |method| {
                if let Some(name) = data.name {
                    method.name = name;
                }
                if let Some(description) = data.description {
                    method.description = description;
                }
                if let Some(active) = data.active {
                    method.active = active;
                }
                if let Some(icon) = data.icon {
                    method.icon = icon;
                }
                if let Some(color) = data.color {
                    method.color = color;
                }
            })
            .ok_or_else(|| RepoError::NotFound(format!("Payment method {} not found", id)))
    }

    fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.db.payment_methods().remove(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_methods_excludes_disabled() {
        let repo = PaymentMethodRepository::new(Database::seeded());
        let active = repo.find_active();
        // Mobile Banking is seeded inactive
        assert_eq!(active.len(), 4);
        assert!(active.iter().all(|m| m.active));
    }
}
