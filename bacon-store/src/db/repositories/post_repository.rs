use chrono::{DateTime, SecondsFormat, Utc};

use bacon_types::{Post, RowId, User};

use crate::db::DbPool;
use crate::error::StoreResult;

/// Raw posts row before the timestamp is parsed
type PostRow = (RowId, RowId, String, Option<String>, String);

pub struct PostRepository {
    pool: DbPool,
}

impl PostRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn into_post((id, user_id, content, image, timestamp): PostRow) -> StoreResult<Post> {
        Ok(Post {
            id,
            user_id,
            content,
            image,
            timestamp: timestamp.parse::<DateTime<Utc>>()?,
        })
    }

    /// Create a new post authored by `author`, stamped with the current time
    pub fn create_post(
        &self,
        author: &User,
        content: &str,
        image: Option<&str>,
    ) -> StoreResult<RowId> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO posts (user_id, content, image, timestamp) VALUES (?, ?, ?, ?)",
            (
                author.id,
                content,
                image,
                Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            ),
        )?;
        let post_id = conn.last_insert_rowid();
        tracing::debug!("{} created post {}", author.username, post_id);
        Ok(post_id)
    }

    /// Get posts by a specific user, newest first
    pub fn get_by_user(&self, user: &User) -> StoreResult<Vec<Post>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, content, image, timestamp
             FROM posts
             WHERE user_id = ?
             ORDER BY timestamp DESC, id DESC",
        )?;

        let rows = stmt
            .query_map([user.id], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
            })?
            .collect::<Result<Vec<PostRow>, _>>()?;

        rows.into_iter().map(Self::into_post).collect()
    }

    /// Get post count for a user
    pub fn post_count(&self, user: &User) -> StoreResult<usize> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM posts WHERE user_id = ?",
            [user.id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}
