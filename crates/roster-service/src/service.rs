use async_trait::async_trait;
use roster_core::{Created, DirectoryError, Employee, EmployeeDirectory, EmployeeId, Repository};
use std::sync::Arc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, DirectoryError>;

/// A concrete implementation of the `EmployeeDirectory` trait.
///
/// Every operation is a single pass through the wrapped `Repository`:
/// - lookups and updates of a missing id fail with `NotFound`
/// - updates only replace `name` and `email`, never the id
/// - deletes go straight to storage without an existence check
#[derive(Debug)]
pub struct EmployeeService<R> {
    repository: Arc<R>,
}

impl<R> Clone for EmployeeService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Repository> EmployeeService<R> {
    /// Creates a new `EmployeeService` on top of the given repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

#[async_trait]
impl<R: Repository> EmployeeDirectory for EmployeeService<R> {
    async fn create(&self, employee: Employee) -> Result<Created<Employee>> {
        let saved = self.repository.save(employee).await?;
        debug!(id = ?saved.id, "created employee");
        Ok(Created(saved))
    }

    async fn get_by_id(&self, id: EmployeeId) -> Result<Employee> {
        trace!(%id, "looking up employee");

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DirectoryError::not_found_by_id(id))
    }

    async fn list_all(&self) -> Result<Vec<Employee>> {
        Ok(self.repository.find_all().await?)
    }

    async fn update(&self, id: EmployeeId, incoming: Employee) -> Result<Employee> {
        let Some(mut existing) = self.repository.find_by_id(id).await? else {
            debug!(%id, "update target not found");
            return Err(DirectoryError::not_found_for_update(id));
        };

        existing.apply(incoming);
        let saved = self.repository.save(existing).await?;
        debug!(%id, "updated employee");
        Ok(saved)
    }

    async fn delete(&self, id: EmployeeId) -> Result<()> {
        self.repository.delete_by_id(id).await?;
        debug!(%id, "deleted employee");
        Ok(())
    }
}
