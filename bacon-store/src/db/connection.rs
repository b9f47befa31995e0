use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

use super::schema::{DEMO_USERS, SCHEMA};
use crate::error::StoreResult;

/// SQLite in-memory database identifier
const MEMORY_DB_PATH: &str = ":memory:";

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Database wrapper with connection pooling support
#[derive(Clone)]
pub struct Database {
    pub pool: DbPool,
}

impl Database {
    /// Create a new database connection pool
    pub fn new<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path_str = path.as_ref().to_string_lossy();

        if path_str.trim().eq_ignore_ascii_case(MEMORY_DB_PATH) {
            // Every connection to :memory: is its own database, so keep exactly one
            let pool = Pool::builder()
                .max_size(1)
                .build(Self::create_connection_manager(SqliteConnectionManager::memory()))?;
            return Ok(Self { pool });
        }

        let manager = Self::create_connection_manager(SqliteConnectionManager::file(path.as_ref()));
        let pool = Pool::new(manager)?;
        tracing::debug!("Opened database pool for {}", path_str);
        Ok(Self { pool })
    }

    /// Enable foreign key enforcement on every connection the pool opens
    ///
    /// # Arguments
    /// * `manager` - File or memory connection manager
    fn create_connection_manager(manager: SqliteConnectionManager) -> SqliteConnectionManager {
        manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
    }

    /// Create an in-memory database pool (useful for testing)
    pub fn in_memory() -> StoreResult<Self> {
        Self::new(MEMORY_DB_PATH)
    }

    /// Create the four tables if they don't exist yet. Safe to call on every start.
    pub fn initialize(&self) -> StoreResult<()> {
        let conn = self.connection()?;
        conn.execute_batch(SCHEMA)?;
        tracing::debug!("Database schema ensured");
        Ok(())
    }

    /// Insert the demo users, leaving existing rows alone
    pub fn seed_demo_users(&self) -> StoreResult<()> {
        let conn = self.connection()?;
        conn.execute_batch(DEMO_USERS)?;
        tracing::info!("Demo users seeded");
        Ok(())
    }

    /// Get a connection from the pool
    pub fn connection(&self) -> StoreResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(db: &Database) -> Vec<String> {
        let conn = db.connection().expect("Failed to get connection");
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .expect("Failed to prepare statement");

        let tables: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .expect("Failed to query tables")
            .collect::<Result<Vec<_>, _>>()
            .expect("Failed to collect tables");
        tables
    }

    #[test]
    fn test_database_creation() {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");

        let tables = table_names(&db);
        assert!(tables.contains(&"users".to_string()));
        assert!(tables.contains(&"posts".to_string()));
        assert!(tables.contains(&"videos".to_string()));
        assert!(tables.contains(&"followers".to_string()));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");
        db.connection()
            .expect("Failed to get connection")
            .execute("INSERT INTO users (username) VALUES ('alice')", [])
            .expect("Failed to insert user");

        db.initialize().expect("Second initialize should be a no-op");

        let count: i64 = db
            .connection()
            .expect("Failed to get connection")
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .expect("Failed to count users");
        assert_eq!(count, 1);
        assert_eq!(table_names(&db).len(), 4);
    }

    #[test]
    fn test_seed_demo_users_twice() {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");
        db.seed_demo_users().expect("Failed to seed demo users");
        db.seed_demo_users().expect("Seeding again should not fail");

        let count: i64 = db
            .connection()
            .expect("Failed to get connection")
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .expect("Failed to count users");
        assert_eq!(count, 3);
    }

    #[test]
    fn test_foreign_keys_enforced() {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");

        let enabled: i64 = db
            .connection()
            .expect("Failed to get connection")
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .expect("Failed to read pragma");
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_memory_database_detection() {
        let memory_paths = [":memory:", " :memory: ", ":MEMORY:", " :Memory: "];

        for path in &memory_paths {
            let db = Database::new(path).expect("Failed to create memory database");
            db.initialize().expect("Failed to initialize schema");
            assert_eq!(db.pool.max_size(), 1);
        }

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file_path = dir.path().join("bacon_test.db");
        let db = Database::new(&file_path).expect("Failed to create file database");
        db.initialize().expect("Failed to initialize file schema");
        assert!(file_path.exists());
    }
}
