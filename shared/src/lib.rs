//! Shared data models for the Restoran management system
//!
//! Entity structs plus their create/update payloads, used by the
//! server and by any client that talks to it.

pub mod models;

pub use models::*;
