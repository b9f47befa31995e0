/// SQL schema for the Bacon database
/// Four tables; every statement is safe to re-run on an existing database
pub const SCHEMA: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    username TEXT UNIQUE NOT NULL
);

-- Posts table
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL,
    content TEXT NOT NULL,
    image TEXT,
    timestamp TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id)
);

CREATE INDEX IF NOT EXISTS idx_posts_user_id ON posts(user_id);

-- Videos table (metadata only)
CREATE TABLE IF NOT EXISTS videos (
    id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL,
    title TEXT NOT NULL,
    length INTEGER NOT NULL CHECK(length > 0),
    uploaded INTEGER NOT NULL DEFAULT 0,
    FOREIGN KEY (user_id) REFERENCES users(id)
);

CREATE INDEX IF NOT EXISTS idx_videos_user_id ON videos(user_id);

-- Followers table (one-way edges, no uniqueness on the pair)
CREATE TABLE IF NOT EXISTS followers (
    id INTEGER PRIMARY KEY,
    follower_id INTEGER NOT NULL,
    followed_id INTEGER NOT NULL,
    FOREIGN KEY (follower_id) REFERENCES users(id),
    FOREIGN KEY (followed_id) REFERENCES users(id)
);

CREATE INDEX IF NOT EXISTS idx_followers_follower ON followers(follower_id);
CREATE INDEX IF NOT EXISTS idx_followers_followed ON followers(followed_id);
"#;

/// Demo accounts so a fresh database has someone to follow
pub const DEMO_USERS: &str = r#"
INSERT OR IGNORE INTO users (username) VALUES ('alice');
INSERT OR IGNORE INTO users (username) VALUES ('bob');
INSERT OR IGNORE INTO users (username) VALUES ('charlie');
"#;
