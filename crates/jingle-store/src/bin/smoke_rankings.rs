use jingle_config::StoreConfig;
use jingle_core::domain::recording::NewRecording;
use jingle_core::domain::song::NewSong;
use jingle_core::ports::{RecordingStore, SongCatalog};
use jingle_core::services::{KaraokeService, RankingOrder};
use jingle_fs::FsBlobStore;
use jingle_store::JsonStores;

fn main() {
  let stores = JsonStores::open("data", &StoreConfig::default());

  let song_id = stores
    .songs
    .add_song(
      NewSong { title: "Test Song".into(), artist: "Test Artist".into(), ..NewSong::default() },
      true,
    )
    .expect("failed to add song");

  let rec_id = stores
    .recordings
    .add_recording(NewRecording {
      username: "smoke".into(),
      song_id,
      rating: None,
      score: Some(9000),
      accuracy: None,
      audio_path: None,
    })
    .expect("failed to add recording");

  stores.recordings.like_recording(&rec_id).expect("failed to like");

  let service = KaraokeService::new(
    stores.songs,
    stores.recordings,
    stores.users,
    FsBlobStore::new("data/audio"),
    true,
  );

  for row in service.rankings(RankingOrder::Likes).expect("failed to build rankings") {
    println!("{} | {} | {} likes | {}", row.username, row.song_title, row.likes, row.created_at);
  }
}
