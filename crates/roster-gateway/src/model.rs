mod employee;
mod health;

pub use employee::{CreateEmployeeRequest, UpdateEmployeeRequest};
pub use health::HealthResponse;
