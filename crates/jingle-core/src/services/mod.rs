pub mod karaoke_service;

pub use karaoke_service::{
  KaraokeService, LeaderboardRow, MediaUpload, RankingOrder, RecordingDraft, UserStats,
};
