use crate::employee::{Employee, EmployeeId};
use crate::error::DirectoryError;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, DirectoryError>;

/// A value that was newly created by the operation that returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created<T>(pub T);

/// Employee record operations with existence rules applied.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync + 'static {
    /// Persists a new employee and returns the stored record.
    async fn create(&self, employee: Employee) -> Result<Created<Employee>>;

    /// Returns the employee with the given id, or `NotFound`.
    async fn get_by_id(&self, id: EmployeeId) -> Result<Employee>;

    /// Returns every stored employee.
    async fn list_all(&self) -> Result<Vec<Employee>>;

    /// Overwrites `name` and `email` of an existing employee, or `NotFound`.
    async fn update(&self, id: EmployeeId, incoming: Employee) -> Result<Employee>;

    /// Deletes the employee. Deleting a missing id succeeds.
    async fn delete(&self, id: EmployeeId) -> Result<()>;
}
