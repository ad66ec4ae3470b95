pub mod memory;
pub mod mysql;

pub use memory::InMemoryRepository;
pub use mysql::MySqlRepository;
pub use roster_core::repository::{ReadRepository, Repository, Result};
pub use roster_core::StorageError;
