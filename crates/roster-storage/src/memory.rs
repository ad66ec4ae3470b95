use async_trait::async_trait;
use dashmap::DashMap;
use roster_core::repository::{ReadRepository, Repository, Result};
use roster_core::{Employee, EmployeeId, StorageError};
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory implementation of the repository contract using DashMap.
///
/// Identifiers are handed out from an atomic sequence tracking the highest id
/// in use. Saving a record with a caller-supplied id moves the sequence up to
/// that id, so assigned ids never collide with existing ones. Once `u64::MAX`
/// is in use, saves without an id fail instead of reusing an identifier.
#[derive(Debug)]
pub struct InMemoryRepository {
    storage: DashMap<EmployeeId, Employee>,
    last_id: AtomicU64,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
            last_id: AtomicU64::new(0),
        }
    }

    fn assign_id(&self, requested: Option<EmployeeId>) -> Result<EmployeeId> {
        match requested {
            Some(id) if !id.is_valid() => Err(StorageError::invalid_id(id)),
            Some(id) => {
                self.last_id.fetch_max(id.get(), Ordering::SeqCst);
                Ok(id)
            }
            None => self
                .last_id
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                    last.checked_add(1)
                })
                .map(|last| EmployeeId::new(last + 1))
                .map_err(|_| {
                    StorageError::Operation("employee id sequence exhausted".to_string())
                }),
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>> {
        Ok(self.storage.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Employee>> {
        let mut employees: Vec<Employee> = self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        employees.sort_by_key(|employee| employee.id);
        Ok(employees)
    }

    async fn exists_by_id(&self, id: EmployeeId) -> Result<bool> {
        Ok(self.storage.contains_key(&id))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn save(&self, employee: Employee) -> Result<Employee> {
        let id = self.assign_id(employee.id)?;
        let stored = Employee {
            id: Some(id),
            ..employee
        };

        self.storage.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<()> {
        self.storage.remove(&id);
        Ok(())
    }
}
