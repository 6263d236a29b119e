//! Generic in-memory table
//!
//! Backing store for every repository: an ordered `Vec` of records
//! behind a `RwLock`, with a monotonic id counter. Ids are never reused,
//! so they stay unique across deletions. Insertion order is the
//! authoritative ordering every list endpoint preserves.

use std::sync::atomic::{AtomicI64, Ordering};

use parking_lot::RwLock;
use shared::{
    Category, Customer, DiningTable, MenuItem, Order, PaymentMethod, Reservation, Staff,
};

/// A record stored in a [`MemTable`]
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> i64 {
                    self.id
                }
                fn set_id(&mut self, id: i64) {
                    self.id = id;
                }
            }
        )*
    };
}

impl_record!(
    MenuItem,
    Category,
    DiningTable,
    Staff,
    Customer,
    PaymentMethod,
    Reservation,
    Order,
);

/// Ordered in-memory table with monotonic id assignment
#[derive(Debug)]
pub struct MemTable<T: Record> {
    rows: RwLock<Vec<T>>,
    next_id: AtomicI64,
}

impl<T: Record> MemTable<T> {
    /// Empty table; ids start at 1
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Table pre-populated with seed rows; the id counter resumes after
    /// the highest seeded id
    pub fn with_rows(rows: Vec<T>) -> Self {
        let max_id = rows.iter().map(Record::id).max().unwrap_or(0);
        Self {
            rows: RwLock::new(rows),
            next_id: AtomicI64::new(max_id + 1),
        }
    }

    /// Snapshot of all rows in insertion order
    pub fn all(&self) -> Vec<T> {
        self.rows.read().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.rows.read().iter().find(|r| r.id() == id).cloned()
    }

    /// First row satisfying `pred`
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.read().iter().find(|r| pred(r)).cloned()
    }

    /// Append a row, assigning the next id; returns the stored row
    pub fn insert(&self, mut row: T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        row.set_id(id);
        self.rows.write().push(row.clone());
        row
    }

    /// Apply `f` to the row with `id`; returns the updated row, or None
    /// when absent
    pub fn update(&self, id: i64, f: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.rows.write();
        let row = rows.iter_mut().find(|r| r.id() == id)?;
        f(row);
        Some(row.clone())
    }

    /// Remove the row with `id`; false when absent
    pub fn remove(&self, id: i64) -> bool {
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        rows.len() != before
    }
}

impl<T: Record> Default for MemTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
