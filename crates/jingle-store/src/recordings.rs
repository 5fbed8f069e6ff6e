use std::path::PathBuf;

use chrono::Utc;

use jingle_core::CoreError;
use jingle_core::domain::ids::{RecordingId, SongId};
use jingle_core::domain::recording::{Comment, NewRecording, Recording};
use jingle_core::ports::RecordingStore;

use crate::document::JsonDocument;

/// Almacén de grabaciones / puntuaciones sobre `recordings.json`.
pub struct JsonRecordingStore {
  doc: JsonDocument<Vec<Recording>>,
}

impl JsonRecordingStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { doc: JsonDocument::new(path) }
  }
}

impl RecordingStore for JsonRecordingStore {
  fn add_recording(&self, new: NewRecording) -> Result<RecordingId, CoreError> {
    let guard = self.doc.lock();
    let mut recordings = guard.load()?;

    let recording = Recording {
      id: RecordingId::new(),
      username: new.username,
      song_id: new.song_id,
      rating: new.rating,
      score: new.score,
      accuracy: new.accuracy,
      audio_path: new.audio_path,
      likes: 0,
      comments: Vec::new(),
      created_at: Utc::now(),
    };
    let id = recording.id;

    recordings.push(recording);
    guard.store(&recordings)?;
    Ok(id)
  }

  fn delete_recording(&self, id: &RecordingId) -> Result<bool, CoreError> {
    let guard = self.doc.lock();
    let mut recordings = guard.load()?;

    let before = recordings.len();
    recordings.retain(|r| r.id != *id);

    if recordings.len() == before {
      return Ok(false);
    }
    guard.store(&recordings)?;
    Ok(true)
  }

  fn like_recording(&self, id: &RecordingId) -> Result<u32, CoreError> {
    let guard = self.doc.lock();
    let mut recordings = guard.load()?;

    let recording = recordings.iter_mut().find(|r| r.id == *id).ok_or(CoreError::NotFound)?;
    recording.likes += 1;
    let likes = recording.likes;

    guard.store(&recordings)?;
    Ok(likes)
  }

  fn add_comment(&self, id: &RecordingId, author: &str, text: &str) -> Result<(), CoreError> {
    // La validación va antes que la búsqueda del id.
    if text.is_empty() {
      return Err(CoreError::Validation("comment must not be empty".into()));
    }

    let guard = self.doc.lock();
    let mut recordings = guard.load()?;

    let recording = recordings.iter_mut().find(|r| r.id == *id).ok_or(CoreError::NotFound)?;
    recording.comments.push(Comment {
      author: author.to_string(),
      text: text.to_string(),
      created_at: Utc::now(),
    });

    guard.store(&recordings)
  }

  fn find_recording(&self, id: &RecordingId) -> Result<Option<Recording>, CoreError> {
    let recordings = self.doc.lock().load()?;
    Ok(recordings.into_iter().find(|r| r.id == *id))
  }

  fn list_recordings(&self) -> Result<Vec<Recording>, CoreError> {
    self.doc.lock().load()
  }

  fn recordings_by_song(&self, song_id: &SongId) -> Result<Vec<Recording>, CoreError> {
    let recordings = self.doc.lock().load()?;
    Ok(recordings.into_iter().filter(|r| r.song_id == *song_id).collect())
  }

  fn top_recordings(
    &self,
    song_id: Option<&SongId>,
    limit: usize,
  ) -> Result<Vec<Recording>, CoreError> {
    let mut recordings = self.doc.lock().load()?;

    if let Some(song_id) = song_id {
      recordings.retain(|r| r.song_id == *song_id);
    }

    // Sort estable: el empate conserva el orden de inserción. Una
    // grabación sin score ordena como 0.
    recordings.sort_by(|a, b| b.score.unwrap_or(0).cmp(&a.score.unwrap_or(0)));
    recordings.truncate(limit);
    Ok(recordings)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  fn store(dir: &std::path::Path) -> JsonRecordingStore {
    JsonRecordingStore::new(dir.join("recordings.json"))
  }

  fn performance(player: &str, song_id: SongId, score: u32) -> NewRecording {
    NewRecording {
      username: player.to_string(),
      song_id,
      rating: None,
      score: Some(score),
      accuracy: None,
      audio_path: None,
    }
  }

  #[test]
  fn filters_by_song() {
    let tmp = tempdir().unwrap();
    let recs = store(tmp.path());
    let (song1, song2) = (SongId::new(), SongId::new());

    recs.add_recording(performance("Alice", song1, 9000)).unwrap();
    recs.add_recording(performance("Bob", song1, 8500)).unwrap();
    recs.add_recording(performance("Charlie", song2, 9500)).unwrap();
    recs.add_recording(performance("Dave", song1, 7500)).unwrap();

    assert_eq!(recs.recordings_by_song(&song1).unwrap().len(), 3);
    let song2_recs = recs.recordings_by_song(&song2).unwrap();
    assert_eq!(song2_recs.len(), 1);
    assert_eq!(song2_recs[0].username, "Charlie");
    assert!(recs.recordings_by_song(&SongId::new()).unwrap().is_empty());
  }

  #[test]
  fn top_sorts_by_score_descending_and_truncates() {
    let tmp = tempdir().unwrap();
    let recs = store(tmp.path());
    let song = SongId::new();

    for (i, score) in [5000, 9000, 3000, 10000, 7500, 8500].into_iter().enumerate() {
      recs.add_recording(performance(&format!("Player{i}"), song, score)).unwrap();
    }

    let top = recs.top_recordings(Some(&song), 10).unwrap();
    assert_eq!(top.len(), 6); // limit > disponibles devuelve todo
    let scores: Vec<_> = top.iter().map(|r| r.score.unwrap()).collect();
    assert_eq!(scores, vec![10000, 9000, 8500, 7500, 5000, 3000]);

    let top3 = recs.top_recordings(Some(&song), 3).unwrap();
    let scores: Vec<_> = top3.iter().map(|r| r.score.unwrap()).collect();
    assert_eq!(scores, vec![10000, 9000, 8500]);
  }

  #[test]
  fn top_breaks_ties_by_insertion_order() {
    let tmp = tempdir().unwrap();
    let recs = store(tmp.path());
    let song = SongId::new();

    recs.add_recording(performance("primero", song, 9000)).unwrap();
    recs.add_recording(performance("segundo", song, 9000)).unwrap();
    recs.add_recording(performance("tercero", song, 9500)).unwrap();

    let top = recs.top_recordings(None, 10).unwrap();
    let players: Vec<_> = top.iter().map(|r| r.username.as_str()).collect();
    assert_eq!(players, vec!["tercero", "primero", "segundo"]);
  }

  #[test]
  fn like_increments_and_is_not_idempotent() {
    let tmp = tempdir().unwrap();
    let recs = store(tmp.path());

    let id = recs.add_recording(performance("Alice", SongId::new(), 100)).unwrap();
    assert_eq!(recs.like_recording(&id).unwrap(), 1);
    assert_eq!(recs.like_recording(&id).unwrap(), 2);
    assert_eq!(recs.like_recording(&id).unwrap(), 3);

    let err = recs.like_recording(&RecordingId::new()).unwrap_err();
    assert!(matches!(err, CoreError::NotFound));
  }

  #[test]
  fn comments_are_validated_then_appended_in_order() {
    let tmp = tempdir().unwrap();
    let recs = store(tmp.path());

    let id = recs.add_recording(performance("Alice", SongId::new(), 100)).unwrap();

    let err = recs.add_comment(&id, "Bob", "").unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
    // Texto vacío con id inexistente: gana la validación.
    let err = recs.add_comment(&RecordingId::new(), "Bob", "").unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));

    let err = recs.add_comment(&RecordingId::new(), "Bob", "bravo!").unwrap_err();
    assert!(matches!(err, CoreError::NotFound));

    recs.add_comment(&id, "Bob", "bravo!").unwrap();
    recs.add_comment(&id, "Carol", "otra vez!").unwrap();

    let rec = recs.find_recording(&id).unwrap().unwrap();
    assert_eq!(rec.comments.len(), 2);
    assert_eq!(rec.comments[0].author, "Bob");
    assert_eq!(rec.comments[1].text, "otra vez!");
  }

  #[test]
  fn delete_twice_is_false_the_second_time() {
    let tmp = tempdir().unwrap();
    let recs = store(tmp.path());

    let id = recs.add_recording(performance("Alice", SongId::new(), 100)).unwrap();
    assert!(recs.delete_recording(&id).unwrap());
    assert!(recs.list_recordings().unwrap().is_empty());
    assert!(!recs.delete_recording(&id).unwrap());
  }

  #[test]
  fn missing_score_sorts_as_zero() {
    let tmp = tempdir().unwrap();
    let recs = store(tmp.path());
    let song = SongId::new();

    recs
      .add_recording(NewRecording {
        username: "sin-score".into(),
        song_id: song,
        rating: Some(7),
        score: None,
        accuracy: None,
        audio_path: None,
      })
      .unwrap();
    recs.add_recording(performance("con-score", song, 1)).unwrap();

    let top = recs.top_recordings(None, 10).unwrap();
    assert_eq!(top[0].username, "con-score");
    assert_eq!(top[1].username, "sin-score");
  }
}
