//! 列表过滤与统计聚合
//!
//! Every dashboard list page runs its collection through the same
//! filter engine ([`filter`]); the summary cards are built from the
//! aggregation helpers in [`stats`].

pub mod filter;
pub mod stats;

pub use filter::{FilterQuery, apply};
pub use stats::{GroupCount, count_by_group, count_where, percentage};
