//! 内存数据库层
//!
//! [`Database`] owns one [`MemTable`] per entity; the per-entity
//! repositories in [`repository`] are the only way handlers touch them.
//! State lives for the lifetime of the process — there is deliberately
//! no persistence.

pub mod repository;
pub mod seed;
pub mod store;

use std::sync::Arc;

use shared::{
    Category, Customer, DiningTable, MenuItem, Order, PaymentMethod, Reservation, Staff,
};
pub use store::{MemTable, Record};

/// All entity tables behind one cheaply-clonable handle
#[derive(Clone, Debug)]
pub struct Database {
    inner: Arc<Tables>,
}

#[derive(Debug)]
struct Tables {
    menu_items: MemTable<MenuItem>,
    categories: MemTable<Category>,
    dining_tables: MemTable<DiningTable>,
    staff: MemTable<Staff>,
    customers: MemTable<Customer>,
    payment_methods: MemTable<PaymentMethod>,
    reservations: MemTable<Reservation>,
    orders: MemTable<Order>,
}

impl Database {
    /// Empty database (tests)
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Tables {
                menu_items: MemTable::new(),
                categories: MemTable::new(),
                dining_tables: MemTable::new(),
                staff: MemTable::new(),
                customers: MemTable::new(),
                payment_methods: MemTable::new(),
                reservations: MemTable::new(),
                orders: MemTable::new(),
            }),
        }
    }

    /// Database pre-populated with the demo sample data
    pub fn seeded() -> Self {
        Self {
            inner: Arc::new(Tables {
                menu_items: MemTable::with_rows(seed::menu_items()),
                categories: MemTable::with_rows(seed::categories()),
                dining_tables: MemTable::with_rows(seed::dining_tables()),
                staff: MemTable::with_rows(seed::staff()),
                customers: MemTable::with_rows(seed::customers()),
                payment_methods: MemTable::with_rows(seed::payment_methods()),
                reservations: MemTable::with_rows(seed::reservations()),
                orders: MemTable::with_rows(seed::orders()),
            }),
        }
    }

    pub(crate) fn menu_items(&self) -> &MemTable<MenuItem> {
        &self.inner.menu_items
    }

    pub(crate) fn categories(&self) -> &MemTable<Category> {
        &self.inner.categories
    }

    pub(crate) fn dining_tables(&self) -> &MemTable<DiningTable> {
        &self.inner.dining_tables
    }

    pub(crate) fn staff(&self) -> &MemTable<Staff> {
        &self.inner.staff
    }

    pub(crate) fn customers(&self) -> &MemTable<Customer> {
        &self.inner.customers
    }

    pub(crate) fn payment_methods(&self) -> &MemTable<PaymentMethod> {
        &self.inner.payment_methods
    }

    pub(crate) fn reservations(&self) -> &MemTable<Reservation> {
        &self.inner.reservations
    }

    pub(crate) fn orders(&self) -> &MemTable<Order> {
        &self.inner.orders
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
