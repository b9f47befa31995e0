use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Custom serde module for DateTime to ensure RFC3339 string format
mod datetime_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date.to_rfc3339();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<DateTime<Utc>>().map_err(serde::de::Error::custom)
    }
}

/// Surrogate key assigned by the store to every persisted row
pub type RowId = i64;

/// A registered user.
///
/// Only the store hands out `User` values, so `id` is always the persisted key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RowId,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: RowId,
    pub user_id: RowId,
    pub content: String,
    /// Optional image filename attached to the post
    #[serde(default)]
    pub image: Option<String>,
    #[serde(with = "datetime_format")]
    pub timestamp: DateTime<Utc>,
}

/// Directed "follower follows followed" record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowEdge {
    pub id: RowId,
    pub follower_id: RowId,
    pub followed_id: RowId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowStats {
    pub followers: usize,
    pub following: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_timestamp_serializes_as_rfc3339() {
        let timestamp = "2025-04-19T12:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let post = Post {
            id: 1,
            user_id: 7,
            content: "hello".to_string(),
            image: None,
            timestamp,
        };

        let json = serde_json::to_value(&post).expect("Failed to serialize post");
        assert_eq!(json["timestamp"], "2025-04-19T12:30:00+00:00");
        assert_eq!(json["user_id"], 7);
    }

    #[test]
    fn test_post_without_image_field_deserializes() {
        let json = r#"{"id":3,"user_id":1,"content":"no picture","timestamp":"2025-04-19T00:00:00+00:00"}"#;
        let post: Post = serde_json::from_str(json).expect("Failed to deserialize post");
        assert_eq!(post.image, None);
        assert_eq!(post.content, "no picture");
    }
}
