use crate::error::Result;
use crate::model::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::{Created, Employee, EmployeeId};

pub async fn create_employee_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>)> {
    let Created(employee) = state.directory().create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn get_employee_handler(
    Path(id): Path<EmployeeId>,
    State(state): State<AppState>,
) -> Result<Json<Employee>> {
    let employee = state.directory().get_by_id(id).await?;
    Ok(Json(employee))
}

pub async fn list_employees_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>> {
    let employees = state.directory().list_all().await?;
    Ok(Json(employees))
}

pub async fn update_employee_handler(
    Path(id): Path<EmployeeId>,
    State(state): State<AppState>,
    Json(request): Json<UpdateEmployeeRequest>,
) -> Result<Json<Employee>> {
    let employee = state.directory().update(id, request.into()).await?;
    Ok(Json(employee))
}

pub async fn delete_employee_handler(
    Path(id): Path<EmployeeId>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    state.directory().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
