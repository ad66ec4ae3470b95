use roster_core::{Employee, EmployeeId};
use serde::Deserialize;

/// Body of `POST /employees`. The id is optional and usually left to storage.
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    pub id: Option<EmployeeId>,
    pub name: String,
    pub email: String,
}

impl From<CreateEmployeeRequest> for Employee {
    fn from(request: CreateEmployeeRequest) -> Self {
        Employee {
            id: request.id,
            name: request.name,
            email: request.email,
        }
    }
}

/// Body of `PUT /employees/{id}`. Any `id` field in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub name: String,
    pub email: String,
}

impl From<UpdateEmployeeRequest> for Employee {
    fn from(request: UpdateEmployeeRequest) -> Self {
        Employee::new(request.name, request.email)
    }
}
