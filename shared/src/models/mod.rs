//! Entity Models
//!
//! Each entity follows the same shape: the stored record, a `Create`
//! payload (required fields plus defaulted options) and an `Update`
//! payload (all fields optional, merged over the existing record).

pub mod category;
pub mod customer;
pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod payment_method;
pub mod reservation;
pub mod staff;

pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use customer::{Customer, CustomerCreate, CustomerUpdate};
pub use dining_table::{DiningTable, DiningTableCreate, DiningTableUpdate};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemUpdate};
pub use order::{Order, OrderCreate, OrderItem, OrderUpdate, ORDER_STATUSES};
pub use payment_method::{
    PaymentIcon, PaymentKind, PaymentKindError, PaymentMethod, PaymentMethodCreate,
    PaymentMethodUpdate,
};
pub use reservation::{Reservation, ReservationCreate, ReservationUpdate, RESERVATION_STATUSES};
pub use staff::{Staff, StaffCreate, StaffUpdate, STAFF_ROLES};

/// Sentinel filter value meaning "no filter" (Indonesian: "all")
pub const FILTER_ALL: &str = "Semua";
