use serde::{Deserialize, Serialize};

/// Lifecycle of a video: `Draft` until its metadata row is persisted,
/// `Published` afterwards. There is no way back to `Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VideoState {
    #[default]
    Draft,
    Published,
}

impl VideoState {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoState::Draft => "draft",
            VideoState::Published => "published",
        }
    }

    pub fn is_uploaded(&self) -> bool {
        matches!(self, VideoState::Published)
    }
}
