use std::path::PathBuf;

use chrono::Utc;

use jingle_core::CoreError;
use jingle_core::domain::genre::Genre;
use jingle_core::domain::ids::SongId;
use jingle_core::domain::song::{NewSong, Song};
use jingle_core::ports::SongCatalog;

use crate::document::JsonDocument;

/// Catálogo de canciones sobre `songs.json`.
///
/// Representación de respaldo: secuencia de registros. El orden del
/// array ES el orden de inserción, que los listados deben conservar.
pub struct JsonSongCatalog {
  doc: JsonDocument<Vec<Song>>,
}

impl JsonSongCatalog {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { doc: JsonDocument::new(path) }
  }
}

impl SongCatalog for JsonSongCatalog {
  fn add_song(&self, new: NewSong, dedupe: bool) -> Result<SongId, CoreError> {
    if new.title.trim().is_empty() {
      return Err(CoreError::Validation("title is required".into()));
    }
    if new.artist.trim().is_empty() {
      return Err(CoreError::Validation("artist is required".into()));
    }

    let guard = self.doc.lock();
    let mut songs = guard.load()?;

    // Dedup-on-insert por id de video: devolver el id existente sin
    // tocar el documento.
    if dedupe {
      if let Some(video_id) = &new.youtube_id {
        if let Some(existing) = songs.iter().find(|s| s.youtube_id.as_ref() == Some(video_id)) {
          return Ok(existing.id);
        }
      }
    }

    let song = Song {
      id: SongId::new(),
      title: new.title,
      artist: new.artist,
      genre: new.genre,
      lyrics: new.lyrics,
      audio_path: new.audio_path,
      youtube_id: new.youtube_id,
      play_count: 0,
      created_at: Utc::now(),
    };
    let id = song.id;

    songs.push(song);
    guard.store(&songs)?;
    Ok(id)
  }

  fn delete_song(&self, id: &SongId) -> Result<bool, CoreError> {
    let guard = self.doc.lock();
    let mut songs = guard.load()?;

    let before = songs.len();
    songs.retain(|s| s.id != *id);

    if songs.len() == before {
      return Ok(false);
    }
    guard.store(&songs)?;
    Ok(true)
  }

  fn increment_play_count(&self, id: &SongId) -> Result<bool, CoreError> {
    let guard = self.doc.lock();
    let mut songs = guard.load()?;

    let Some(song) = songs.iter_mut().find(|s| s.id == *id) else {
      return Ok(false);
    };
    song.play_count += 1;

    guard.store(&songs)?;
    Ok(true)
  }

  fn find_song(&self, id: &SongId) -> Result<Option<Song>, CoreError> {
    let songs = self.doc.lock().load()?;
    Ok(songs.into_iter().find(|s| s.id == *id))
  }

  fn list_songs(&self) -> Result<Vec<Song>, CoreError> {
    self.doc.lock().load()
  }

  fn list_songs_by_genre(&self, genre: Option<Genre>) -> Result<Vec<Song>, CoreError> {
    let songs = self.doc.lock().load()?;
    match genre {
      None => Ok(songs),
      Some(g) => Ok(songs.into_iter().filter(|s| s.genre == g).collect()),
    }
  }
}
