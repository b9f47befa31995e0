use bacon_types::{RowId, User, Video, VideoSink};

use crate::db::DbPool;
use crate::error::{StoreError, StoreResult};

pub struct VideoRepository {
    pool: DbPool,
}

impl VideoRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert the metadata row for `video` as uploaded
    fn insert(&self, video: &Video) -> StoreResult<RowId> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO videos (user_id, title, length, uploaded) VALUES (?, ?, ?, 1)",
            (video.author_id(), video.title(), video.length()),
        )?;
        let video_id = conn.last_insert_rowid();
        tracing::debug!("Stored video '{}' as {}", video.title(), video_id);
        Ok(video_id)
    }

    /// Number of published videos authored by `user`
    pub fn count_for_user(&self, user: &User) -> StoreResult<usize> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM videos WHERE user_id = ? AND uploaded = 1",
            [user.id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}

impl VideoSink for VideoRepository {
    type Error = StoreError;

    fn persist(&self, video: &Video) -> Result<RowId, Self::Error> {
        self.insert(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::UserRepository;
    use crate::db::Database;
    use bacon_types::{UploadError, VideoState};

    fn setup_test_db() -> (Database, User, VideoRepository) {
        let db = Database::in_memory().expect("Failed to create test database");
        db.initialize().expect("Failed to initialize schema");
        let alice = UserRepository::new(db.pool.clone())
            .register_or_fetch("alice")
            .expect("Failed to register alice");
        let repo = VideoRepository::new(db.pool.clone());
        (db, alice, repo)
    }

    #[test]
    fn test_upload_transitions_draft_to_published() {
        let (db, alice, repo) = setup_test_db();
        let mut video = Video::new("Frying 101", &alice, 7);
        assert_eq!(video.state(), VideoState::Draft);

        let id = video.upload(&repo).unwrap();

        assert!(video.is_uploaded());
        assert_eq!(video.id(), Some(id));

        let conn = db.connection().unwrap();
        let (count, title, length, uploaded): (i64, String, u32, bool) = conn
            .query_row(
                "SELECT COUNT(*), title, length, uploaded FROM videos WHERE user_id = ?",
                [alice.id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(title, "Frying 101");
        assert_eq!(length, 7);
        assert!(uploaded);
    }

    #[test]
    fn test_zero_length_is_rejected_and_stays_draft() {
        let (_db, alice, repo) = setup_test_db();
        let mut video = Video::new("Blink", &alice, 0);

        let err = video.upload(&repo).unwrap_err();

        assert!(matches!(err, UploadError::Store(StoreError::Constraint(_))));
        assert!(!video.is_uploaded());
        assert_eq!(repo.count_for_user(&alice).unwrap(), 0);
    }

    #[test]
    fn test_unknown_author_stays_draft() {
        let (_db, _alice, repo) = setup_test_db();
        let ghost = User { id: 404, username: "ghost".to_string() };
        let mut video = Video::new("Haunting", &ghost, 3);

        assert!(video.upload(&repo).is_err());
        assert_eq!(video.state(), VideoState::Draft);
    }

    #[test]
    fn test_count_for_user() {
        let (_db, alice, repo) = setup_test_db();
        Video::new("One", &alice, 1).upload(&repo).unwrap();
        Video::new("Two", &alice, 2).upload(&repo).unwrap();

        assert_eq!(repo.count_for_user(&alice).unwrap(), 2);
    }
}
