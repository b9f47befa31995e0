use serde::Serialize;
use thiserror::Error;

use crate::enums::VideoState;
use crate::models::{RowId, User};

/// Persists video metadata and returns the new row id.
///
/// Implemented by the store's video repository; `Video::upload` is the only caller.
pub trait VideoSink {
    type Error: std::error::Error + 'static;

    fn persist(&self, video: &Video) -> Result<RowId, Self::Error>;
}

#[derive(Error, Debug)]
pub enum UploadError<E: std::error::Error + 'static> {
    #[error("Video '{0}' has already been uploaded")]
    AlreadyUploaded(String),

    #[error("Failed to persist video: {0}")]
    Store(#[source] E),
}

/// Video metadata authored by a user.
///
/// Fields are private so the Draft -> Published transition can only happen
/// through [`Video::upload`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
    title: String,
    author_id: RowId,
    length: u32,
    id: Option<RowId>,
    state: VideoState,
}

impl Video {
    /// Create a draft video. `length` is in minutes.
    pub fn new(title: impl Into<String>, author: &User, length: u32) -> Self {
        Self {
            title: title.into(),
            author_id: author.id,
            length,
            id: None,
            state: VideoState::Draft,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author_id(&self) -> RowId {
        self.author_id
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// Row id, present once the video is published
    pub fn id(&self) -> Option<RowId> {
        self.id
    }

    pub fn state(&self) -> VideoState {
        self.state
    }

    pub fn is_uploaded(&self) -> bool {
        self.state.is_uploaded()
    }

    /// Persist the metadata through `sink`, then mark the video published.
    ///
    /// On failure the video stays a draft and can be retried.
    pub fn upload<S: VideoSink>(&mut self, sink: &S) -> Result<RowId, UploadError<S::Error>> {
        if self.is_uploaded() {
            return Err(UploadError::AlreadyUploaded(self.title.clone()));
        }

        let id = sink.persist(self).map_err(UploadError::Store)?;
        self.id = Some(id);
        self.state = VideoState::Published;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, Error)]
    #[error("disk full")]
    struct DiskFull;

    struct FakeSink {
        next_id: RowId,
        fail: bool,
        calls: Cell<usize>,
    }

    impl FakeSink {
        fn ok(next_id: RowId) -> Self {
            Self { next_id, fail: false, calls: Cell::new(0) }
        }

        fn failing() -> Self {
            Self { next_id: 0, fail: true, calls: Cell::new(0) }
        }
    }

    impl VideoSink for FakeSink {
        type Error = DiskFull;

        fn persist(&self, _video: &Video) -> Result<RowId, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(DiskFull)
            } else {
                Ok(self.next_id)
            }
        }
    }

    fn author() -> User {
        User { id: 4, username: "alice".to_string() }
    }

    #[test]
    fn test_new_video_is_draft() {
        let video = Video::new("Cooking bacon", &author(), 12);
        assert_eq!(video.state(), VideoState::Draft);
        assert!(!video.is_uploaded());
        assert_eq!(video.id(), None);
        assert_eq!(video.author_id(), 4);
    }

    #[test]
    fn test_upload_publishes_video() {
        let sink = FakeSink::ok(42);
        let mut video = Video::new("Cooking bacon", &author(), 12);

        let id = video.upload(&sink).expect("Upload should succeed");

        assert_eq!(id, 42);
        assert_eq!(video.id(), Some(42));
        assert!(video.is_uploaded());
        assert_eq!(video.state(), VideoState::Published);
    }

    #[test]
    fn test_failed_upload_stays_draft() {
        let sink = FakeSink::failing();
        let mut video = Video::new("Cooking bacon", &author(), 12);

        let result = video.upload(&sink);

        assert!(matches!(result, Err(UploadError::Store(DiskFull))));
        assert!(!video.is_uploaded());
        assert_eq!(video.id(), None);
    }

    #[test]
    fn test_second_upload_is_rejected_without_persisting() {
        let sink = FakeSink::ok(1);
        let mut video = Video::new("Cooking bacon", &author(), 12);
        video.upload(&sink).expect("First upload should succeed");

        let result = video.upload(&sink);

        assert!(matches!(result, Err(UploadError::AlreadyUploaded(_))));
        assert_eq!(sink.calls.get(), 1);
        assert_eq!(video.id(), Some(1));
    }
}
