mod parser;

pub use parser::{extract_video_id, is_valid_youtube_url};
