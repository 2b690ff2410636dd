use thiserror::Error;

use super::variant_list::VariantList;

#[derive(Error, Debug)]
pub enum EnumerationError {
    #[error("transcript listing request for video {video_id} failed: {cause}")]
    Http { video_id: String, cause: String },
    #[error("no caption data found for video {video_id}")]
    NoCaptionData { video_id: String },
    #[error("caption metadata for video {video_id} was not understood: {cause}")]
    Malformed { video_id: String, cause: String },
}

/// Domain interface for enumerating the transcript tracks of a video.
pub trait TranscriptSource: Send {
    fn list_variants(&self, video_id: &str) -> Result<VariantList, EnumerationError>;
}
