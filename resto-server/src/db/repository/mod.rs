//! Repository Module
//!
//! CRUD operations over the in-memory tables, one repository per entity.
//! Every mutation either fully replaces the stored record or is not
//! applied at all; there are no partial-failure semantics.

// Catalog
pub mod category;
pub mod menu_item;

// Location
pub mod dining_table;

// People
pub mod customer;
pub mod staff;

// Payments and bookings
pub mod payment_method;
pub mod reservation;

// Orders
pub mod order;

// Re-exports
pub use category::CategoryRepository;
pub use customer::CustomerRepository;
pub use dining_table::DiningTableRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use payment_method::PaymentMethodRepository;
pub use reservation::ReservationRepository;
pub use staff::StaffRepository;

use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Common repository trait for basic CRUD
pub trait Repository<T, CreateDto, UpdateDto> {
    fn find_all(&self) -> Vec<T>;
    fn find_by_id(&self, id: i64) -> Option<T>;
    fn create(&self, data: CreateDto) -> RepoResult<T>;
    fn update(&self, id: i64, data: UpdateDto) -> RepoResult<T>;
    fn delete(&self, id: i64) -> RepoResult<bool>;
}
