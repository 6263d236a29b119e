//! Order Repository
//!
//! Orders arrive either from the dashboard (manual entry) or from a cart
//! checkout. Totals are always derived through the cart ledger, never
//! trusted from the payload.

use shared::{Order, OrderCreate, OrderUpdate};

use super::{RepoError, RepoResult, Repository};
use crate::cart::Cart;
use crate::db::Database;

#[derive(Clone)]
pub struct OrderRepository {
    db: Database,
}

impl OrderRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Store a fully-built order (cart checkout path)
    pub fn insert(&self, order: Order) -> Order {
        self.db.orders().insert(order)
    }

    /// Build an order from a manual dashboard entry, deriving totals
    /// through the same ledger math the cart uses
    pub fn create_with_tax_rate(&self, data: OrderCreate, tax_rate_percent: u32) -> Order {
        let mut cart = Cart::new();
        for (i, item) in data.items.iter().enumerate() {
            cart.add_or_increment(i as i64 + 1, &item.name, item.price);
            cart.set_quantity(i as i64 + 1, item.quantity);
        }
        let totals = cart.totals(tax_rate_percent);

        let now = chrono::Local::now();
        let order = Order {
            id: 0,
            table: data.table,
            customer: data.customer,
            items: data.items,
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
            status: data.status.unwrap_or_else(|| "Menunggu".to_string()),
            date: now.format("%-d %B %Y").to_string(),
            time: now.format("%H:%M").to_string(),
            payment: None,
        };
        self.db.orders().insert(order)
    }
}

impl Repository<Order, OrderCreate, OrderUpdate> for OrderRepository {
    fn find_all(&self) -> Vec<Order> {
        self.db.orders().all()
    }

    fn find_by_id(&self, id: i64) -> Option<Order> {
        self.db.orders().get(id)
    }

    fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        Ok(self.create_with_tax_rate(data, crate::cart::DEFAULT_TAX_RATE_PERCENT))
    }

    fn update(&self, id: i64, data: OrderUpdate) -> RepoResult<Order> {
        self.db
            .orders()
            .update(id, |order| {
                if let Some(table) = data.table {
                    order.table = table;
                }
                if let Some(customer) = data.customer {
                    order.customer = customer;
                }
                if let Some(status) = data.status {
                    order.status = status;
                }
            })
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.db.orders().remove(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::OrderItem;

    #[test]
    fn order_ids_continue_after_seeded_range() {
        let repo = OrderRepository::new(Database::seeded());
        let created = repo
            .create(OrderCreate {
                table: "Meja 4".to_string(),
                customer: "Tono Sucipto".to_string(),
                items: vec![OrderItem {
                    name: "Soto Ayam".to_string(),
                    quantity: 1,
                    price: 30000.0,
                }],
                status: None,
            })
            .unwrap();

        // Seeded orders end at 1005
        assert_eq!(created.id, 1006);
        assert_eq!(created.status, "Menunggu");
    }

    #[test]
    fn manual_order_totals_are_derived_not_trusted() {
        let repo = OrderRepository::new(Database::new());
        let created = repo
            .create(OrderCreate {
                table: "Meja 1".to_string(),
                customer: "Budi".to_string(),
                items: vec![
                    OrderItem {
                        name: "Nasi Goreng Spesial".to_string(),
                        quantity: 2,
                        price: 45000.0,
                    },
                    OrderItem {
                        name: "Es Teh Manis".to_string(),
                        quantity: 2,
                        price: 10000.0,
                    },
                ],
                status: None,
            })
            .unwrap();

        assert_eq!(created.subtotal, 110000.0);
        assert_eq!(created.tax, 11000.0);
        assert_eq!(created.total, 121000.0);
    }
}
