//! Category Repository

use shared::{Category, CategoryCreate, CategoryUpdate};

use super::{RepoError, RepoResult, Repository};
use crate::db::Database;

#[derive(Clone)]
pub struct CategoryRepository {
    db: Database,
}

impl CategoryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_by_name(&self, name: &str) -> Option<Category> {
        self.db.categories().find(|c| c.name == name)
    }
}

impl Repository<Category, CategoryCreate, CategoryUpdate> for CategoryRepository {
    fn find_all(&self) -> Vec<Category> {
        self.db.categories().all()
    }

    fn find_by_id(&self, id: i64) -> Option<Category> {
        self.db.categories().get(id)
    }

    fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        if self.find_by_name(&data.name).is_some() {
            return Err(RepoError::Duplicate(format!(
                "Category '{}' already exists",
                data.name
            )));
        }

        let category = Category {
            id: 0,
            name: data.name,
            description: data.description.unwrap_or_default(),
            color: data
                .color
                .unwrap_or_else(|| "bg-gray-100 text-gray-800".to_string()),
        };
        Ok(self.db.categories().insert(category))
    }

    fn update(&self, id: i64, data: CategoryUpdate) -> RepoResult<Category> {
        if let Some(name) = &data.name
            && let Some(found) = self.find_by_name(name)
            && found.id != id
        {
            return Err(RepoError::Duplicate(format!(
                "Category '{}' already exists",
                name
            )));
        }

        self.db
            .categories()
            .update(id, |category| {
                if let Some(name) = data.name {
                    category.name = name;
                }
                if let Some(description) = data.description {
                    category.description = description;
                }
                if let Some(color) = data.color {
                    category.color = color;
                }
            })
            .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))
    }

    fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.db.categories().remove(id))
    }
}
