//! Menu Item Repository

use shared::{MenuItem, MenuItemCreate, MenuItemUpdate};

use super::{RepoError, RepoResult, Repository};
use crate::db::Database;

#[derive(Clone)]
pub struct MenuItemRepository {
    db: Database,
}

impl MenuItemRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Find a menu item by exact name
    pub fn find_by_name(&self, name: &str) -> Option<MenuItem> {
        self.db.menu_items().find(|m| m.name == name)
    }
}

impl Repository<MenuItem, MenuItemCreate, MenuItemUpdate> for MenuItemRepository {
    fn find_all(&self) -> Vec<MenuItem> {
        self.db.menu_items().all()
    }

    fn find_by_id(&self, id: i64) -> Option<MenuItem> {
        self.db.menu_items().get(id)
    }

    fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        if self.find_by_name(&data.name).is_some() {
            return Err(RepoError::Duplicate(format!(
                "Menu item '{}' already exists",
                data.name
            )));
        }

        let item = MenuItem {
            id: 0,
            name: data.name,
            category: data.category,
            price: data.price,
            status: data.status.unwrap_or_else(|| "Tersedia".to_string()),
            image: data.image.unwrap_or_else(|| "/placeholder.svg".to_string()),
        };
        Ok(self.db.menu_items().insert(item))
    }

    fn update(&self, id: i64, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        if let Some(name) = &data.name
            && let Some(found) = self.find_by_name(name)
            && found.id != id
        {
            return Err(RepoError::Duplicate(format!(
                "Menu item '{}' already exists",
                name
            )));
        }

        self.db
            .menu_items()
            .update(id, |item| {
                if let Some(name) = data.name {
                    item.name = name;
                }
                if let Some(category) = data.category {
                    item.category = category;
                }
                if let Some(price) = data.price {
                    item.price = price;
                }
                if let Some(status) = data.status {
                    item.status = status;
                }
                if let Some(image) = data.image {
                    item.image = image;
                }
            })
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.db.menu_items().remove(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_next_id_and_defaults() {
        let repo = MenuItemRepository::new(Database::seeded());
        let created = repo
            .create(MenuItemCreate {
                name: "Gado-Gado".to_string(),
                category: "Makanan Pembuka".to_string(),
                price: 25000.0,
                status: None,
                image: None,
            })
            .unwrap();

        // 8 seeded items, counter continues at 9
        assert_eq!(created.id, 9);
        assert_eq!(created.status, "Tersedia");
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let repo = MenuItemRepository::new(Database::seeded());
        let err = repo
            .create(MenuItemCreate {
                name: "Sate Ayam".to_string(),
                category: "Makanan Utama".to_string(),
                price: 35000.0,
                status: None,
                image: None,
            })
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let repo = MenuItemRepository::new(Database::seeded());
        let updated = repo
            .update(
                5,
                MenuItemUpdate {
                    name: None,
                    category: None,
                    price: None,
                    status: Some("Tersedia".to_string()),
                    image: None,
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Jus Alpukat");
        assert_eq!(updated.status, "Tersedia");
        assert_eq!(updated.price, 15000.0);
    }

    #[test]
    fn update_missing_item_is_not_found() {
        let repo = MenuItemRepository::new(Database::new());
        let err = repo
            .update(
                1,
                MenuItemUpdate {
                    name: None,
                    category: None,
                    price: Some(1.0),
                    status: None,
                    image: None,
                },
            )
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
