//! Core types and traits for the Roster employee record service.
//!
//! This crate provides the shared employee model, the storage contract
//! implemented by `roster-storage`, and the directory contract implemented
//! by `roster-service` and consumed by the HTTP gateway.

pub mod directory;
pub mod employee;
pub mod error;
pub mod repository;

pub use directory::{Created, EmployeeDirectory};
pub use employee::{Employee, EmployeeId};
pub use error::{DirectoryError, StorageError};
pub use repository::{ReadRepository, Repository};
