use jingle_core::domain::song::NewSong;
use jingle_core::ports::SongCatalog;
use jingle_store::JsonSongCatalog;

fn main() {
  // Misma ruta que en smoke_rankings
  let catalog = JsonSongCatalog::new("data/songs.json");

  let new = NewSong {
    title: "Test Song".to_string(),
    artist: "Test Artist".to_string(),
    youtube_id: Some("dQw4w9WgXcQ".to_string()),
    ..NewSong::default()
  };

  let id = catalog.add_song(new, true).expect("failed to add song");
  println!("Saved song with id = {id}");

  let loaded = catalog.find_song(&id).expect("failed to load song");
  println!("Loaded from document: {loaded:?}");

  for song in catalog.list_songs().expect("failed to list songs") {
    println!("- {} / {} [{}] plays={}", song.title, song.artist, song.genre, song.play_count);
  }
}
