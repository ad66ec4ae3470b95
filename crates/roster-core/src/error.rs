use crate::employee::EmployeeId;
use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

impl StorageError {
    /// Rejection of a caller-supplied id below [`EmployeeId::MIN`].
    pub fn invalid_id(id: EmployeeId) -> Self {
        Self::InvalidData(format!(
            "employee id must be at least {}, got {id}",
            EmployeeId::MIN
        ))
    }
}

/// Errors returned by an [`EmployeeDirectory`](crate::EmployeeDirectory).
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// The targeted employee does not exist.
    #[error("{message}")]
    NotFound { id: EmployeeId, message: String },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl DirectoryError {
    /// Not-found error reported by lookups.
    pub fn not_found_by_id(id: EmployeeId) -> Self {
        Self::NotFound {
            id,
            message: format!("Employee not found with ID {id}"),
        }
    }

    /// Not-found error reported by updates.
    pub fn not_found_for_update(id: EmployeeId) -> Self {
        Self::NotFound {
            id,
            message: format!("Employee not found with id: {id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_message() {
        assert_eq!(
            StorageError::invalid_id(EmployeeId::new(0)).to_string(),
            "stored data is invalid: employee id must be at least 1, got 0"
        );
    }

    #[test]
    fn not_found_messages() {
        let id = EmployeeId::new(1);

        assert_eq!(
            DirectoryError::not_found_by_id(id).to_string(),
            "Employee not found with ID 1"
        );
        assert_eq!(
            DirectoryError::not_found_for_update(id).to_string(),
            "Employee not found with id: 1"
        );
    }

    #[test]
    fn storage_error_is_transparent() {
        let err = DirectoryError::from(StorageError::Timeout("pool".to_string()));
        assert_eq!(err.to_string(), "storage operation timed out: pool");
    }
}
