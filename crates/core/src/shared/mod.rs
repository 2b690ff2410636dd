pub mod constants;
pub mod video_id;
