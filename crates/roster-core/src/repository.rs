use crate::employee::{Employee, EmployeeId};
use crate::error::StorageError;
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of a repository.
///
/// This trait provides only the read operations from [`Repository`].
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the employee with the given id.
    /// Returns `None` if no such record exists.
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>>;

    /// Returns a snapshot of every stored employee.
    async fn find_all(&self) -> Result<Vec<Employee>>;

    /// Checks whether an employee with the given id exists.
    async fn exists_by_id(&self, id: EmployeeId) -> Result<bool>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts the employee, or overwrites the stored record with the same id.
    ///
    /// An id is assigned when `employee.id` is `None`. The returned record
    /// always carries its id.
    async fn save(&self, employee: Employee) -> Result<Employee>;

    /// Deletes the employee with the given id.
    /// It is not an error if the record does not exist.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<()>;
}
