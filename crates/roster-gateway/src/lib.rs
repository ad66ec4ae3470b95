//! HTTP surface of the Roster employee record service.
//!
//! [`App::router`] maps the `/employees` routes onto an
//! [`EmployeeDirectory`](roster_core::EmployeeDirectory) held in [`AppState`].

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
