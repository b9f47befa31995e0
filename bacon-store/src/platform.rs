//! Video platform: the entry point callers use to publish a video.
//!
//! Holds no state; it hands the video to whichever [`VideoSink`] persists it.

use bacon_types::{RowId, UploadError, Video, VideoSink};

/// Publish `video` through `sink`
pub fn add_video<S: VideoSink>(
    sink: &S,
    video: &mut Video,
) -> Result<RowId, UploadError<S::Error>> {
    tracing::debug!("Adding video '{}' ({} min)", video.title(), video.length());
    video.upload(sink)
}
