mod employee;
mod health;

pub use employee::{
    create_employee_handler, delete_employee_handler, get_employee_handler,
    list_employees_handler, update_employee_handler,
};
pub use health::health_handler;
