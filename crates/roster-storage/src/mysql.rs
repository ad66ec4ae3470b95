use async_trait::async_trait;
use roster_core::error::StorageError;
use roster_core::repository::{ReadRepository, Repository, Result};
use roster_core::{Employee, EmployeeId};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use tracing::{debug, trace};

/// DDL for the `employees` table. Safe to run repeatedly.
pub const SCHEMA: &str = include_str!("../ddl/mysql/employees.sql");

/// MySQL implementation of the repository contract.
///
/// Records live in a single `employees` table keyed by an `AUTO_INCREMENT`
/// id. Saving a record that already carries an id is an upsert, so a
/// caller-supplied id either creates that row or overwrites it. Id 0 is
/// rejected before reaching MySQL, which would otherwise treat it as a request
/// for a fresh `AUTO_INCREMENT` value.
#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Creates the `employees` table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        debug!("employees schema ready");
        Ok(())
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

fn employee_from_row(row: &MySqlRow) -> Result<Employee> {
    let id: u64 = row.try_get("id").map_err(map_sqlx_error)?;
    let name: String = row.try_get("name").map_err(map_sqlx_error)?;
    let email: String = row.try_get("email").map_err(map_sqlx_error)?;

    Ok(Employee::with_id(id, name, email))
}

#[async_trait]
impl ReadRepository for MySqlRepository {
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email
            FROM employees
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(employee_from_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Employee>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        trace!(count = rows.len(), "fetched employees");
        rows.iter().map(employee_from_row).collect()
    }

    async fn exists_by_id(&self, id: EmployeeId) -> Result<bool> {
        let exists = sqlx::query(
            r#"
            SELECT 1
            FROM employees
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .is_some();

        Ok(exists)
    }
}

#[async_trait]
impl Repository for MySqlRepository {
    async fn save(&self, employee: Employee) -> Result<Employee> {
        let id = match employee.id {
            Some(id) if !id.is_valid() => return Err(StorageError::invalid_id(id)),
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT INTO employees (id, name, email)
                    VALUES (?, ?, ?) AS incoming
                    ON DUPLICATE KEY UPDATE
                      name = incoming.name,
                      email = incoming.email
                    "#,
                )
                .bind(id.get())
                .bind(&employee.name)
                .bind(&employee.email)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;
                id
            }
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO employees (name, email)
                    VALUES (?, ?)
                    "#,
                )
                .bind(&employee.name)
                .bind(&employee.email)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;
                EmployeeId::new(result.last_insert_id())
            }
        };

        trace!(%id, "saved employee");
        Ok(Employee {
            id: Some(id),
            ..employee
        })
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM employees
            WHERE id = ?
            "#,
        )
        .bind(id.get())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        trace!(%id, rows = result.rows_affected(), "deleted employee");
        Ok(())
    }
}
