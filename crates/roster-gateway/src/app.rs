use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_employee_handler, delete_employee_handler, get_employee_handler, health_handler,
    list_employees_handler, update_employee_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route(
                "/employees",
                get(list_employees_handler).post(create_employee_handler),
            )
            .route(
                "/employees/{id}",
                get(get_employee_handler)
                    .put(update_employee_handler)
                    .delete(delete_employee_handler),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
