use rusqlite::{OptionalExtension, Row, TransactionBehavior};

use bacon_types::User;

use crate::db::DbPool;
use crate::error::StoreResult;

pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn map_user(row: &Row<'_>) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            username: row.get(1)?,
        })
    }

    /// Get or create the user with this exact username.
    ///
    /// Returns the user and whether the row was created by this call. The
    /// insert and the lookup share one immediate transaction.
    pub fn get_or_create(&self, username: &str) -> StoreResult<(User, bool)> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let inserted = tx.execute(
            "INSERT OR IGNORE INTO users (username) VALUES (?)",
            [username],
        )?;
        let user = tx.query_row(
            "SELECT id, username FROM users WHERE username = ?",
            [username],
            Self::map_user,
        )?;
        tx.commit()?;

        let created = inserted > 0;
        if created {
            tracing::debug!("Registered user {} with id {}", user.username, user.id);
        }
        Ok((user, created))
    }

    /// Register `username` if it is new, otherwise fetch the existing user
    pub fn register_or_fetch(&self, username: &str) -> StoreResult<User> {
        self.get_or_create(username).map(|(user, _)| user)
    }

    /// Get user by username (exact, case-sensitive match)
    pub fn get_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let conn = self.pool.get()?;
        let user = conn
            .query_row(
                "SELECT id, username FROM users WHERE username = ?",
                [username],
                Self::map_user,
            )
            .optional()?;
        Ok(user)
    }

    /// Get all users ordered by id
    pub fn list_all(&self) -> StoreResult<Vec<User>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare("SELECT id, username FROM users ORDER BY id")?;
        let users = stmt
            .query_map([], Self::map_user)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }
}
