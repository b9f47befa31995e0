use bacon_types::{FollowEdge, FollowStats, User};

use crate::db::DbPool;
use crate::error::StoreResult;

pub struct FollowRepository {
    pool: DbPool,
}

impl FollowRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Record that `follower` follows `followed`.
    ///
    /// Always inserts a new edge: repeating a follow leaves duplicate rows and
    /// self-follows are accepted.
    pub fn follow(&self, follower: &User, followed: &User) -> StoreResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO followers (follower_id, followed_id) VALUES (?, ?)",
            (follower.id, followed.id),
        )?;
        tracing::debug!("{} now follows {}", follower.username, followed.username);
        Ok(())
    }

    /// Remove every edge from `follower` to `followed`, returning how many went
    pub fn unfollow(&self, follower: &User, followed: &User) -> StoreResult<usize> {
        let conn = self.pool.get()?;
        let rows_affected = conn.execute(
            "DELETE FROM followers WHERE follower_id = ? AND followed_id = ?",
            (follower.id, followed.id),
        )?;
        tracing::debug!(
            "{} unfollowed {} ({} edges removed)",
            follower.username,
            followed.username,
            rows_affected
        );
        Ok(rows_affected)
    }

    /// All edges for the ordered pair, oldest first
    pub fn edges_between(&self, follower: &User, followed: &User) -> StoreResult<Vec<FollowEdge>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, follower_id, followed_id FROM followers
             WHERE follower_id = ? AND followed_id = ?
             ORDER BY id",
        )?;

        let edges = stmt
            .query_map((follower.id, followed.id), |row| {
                Ok(FollowEdge {
                    id: row.get(0)?,
                    follower_id: row.get(1)?,
                    followed_id: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(edges)
    }

    /// Get follower count
    pub fn follower_count(&self, user: &User) -> StoreResult<usize> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM followers WHERE followed_id = ?",
            [user.id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Get following count
    pub fn following_count(&self, user: &User) -> StoreResult<usize> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM followers WHERE follower_id = ?",
            [user.id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    pub fn stats(&self, user: &User) -> StoreResult<FollowStats> {
        Ok(FollowStats {
            followers: self.follower_count(user)?,
            following: self.following_count(user)?,
        })
    }
}
