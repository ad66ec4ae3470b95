//! Employee record service.
//!
//! [`EmployeeService`] wraps any [`Repository`](roster_core::Repository) and
//! applies the existence rules of the
//! [`EmployeeDirectory`](roster_core::EmployeeDirectory) contract.

pub mod service;

pub use service::EmployeeService;
