use crate::db::repositories::{FollowRepository, PostRepository, UserRepository, VideoRepository};
use crate::db::Database;

/// Everything a front end needs to drive the social graph, sharing one pool
pub struct AppState {
    pub db: Database,
    pub users: UserRepository,
    pub follows: FollowRepository,
    pub posts: PostRepository,
    pub videos: VideoRepository,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            users: UserRepository::new(db.pool.clone()),
            follows: FollowRepository::new(db.pool.clone()),
            posts: PostRepository::new(db.pool.clone()),
            videos: VideoRepository::new(db.pool.clone()),
            db,
        }
    }
}
