pub mod account;
pub mod genre;
pub mod ids;
pub mod recording;
pub mod song;

pub use genre::Genre;
pub use ids::{RecordingId, SongId};
