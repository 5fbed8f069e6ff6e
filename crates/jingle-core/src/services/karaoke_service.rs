use chrono::{DateTime, Utc};

use crate::auth::Identity;
use crate::domain::genre::Genre;
use crate::domain::ids::{RecordingId, SongId};
use crate::domain::recording::{NewRecording, Recording};
use crate::domain::song::{NewSong, Song};
use crate::errors::CoreError;
use crate::ports::{BlobStore, RecordingStore, SongCatalog, UserStore};

/// Orden solicitado para el leaderboard.
///
/// Solo "likes" es una clave reconocida; cualquier otra cosa cae en
/// `Insertion`, que deja la colección en su orden natural. `Insertion`
/// es también el desempate del sort estable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingOrder {
  Likes,
  #[default]
  Insertion,
}

impl RankingOrder {
  /// Convierte la clave textual que manda la capa de presentación.
  /// Nunca falla: clave no reconocida => `Insertion`.
  pub fn parse(key: &str) -> RankingOrder {
    match key {
      "likes" => RankingOrder::Likes,
      _ => RankingOrder::Insertion,
    }
  }
}

/// Fila lista para mostrar en el leaderboard: grabación + título de
/// su canción ya resuelto.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
  pub recording_id: RecordingId,
  pub username: String,
  pub song_title: String,
  pub created_at: DateTime<Utc>,
  pub likes: u32,
}

/// Estadísticas agregadas de una cuenta.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
  pub recordings: usize,
  /// Suma de likes de todas sus grabaciones. Una grabación ya borrada
  /// aporta 0.
  pub total_likes: u64,
  pub member_since: DateTime<Utc>,
  pub favorites: usize,
}

/// Audio subido por el usuario, todavía sin ruta asignada.
#[derive(Debug, Clone)]
pub struct MediaUpload {
  pub bytes: Vec<u8>,
  pub suggested_name: String,
}

/// Datos de una performance a punto de guardarse.
#[derive(Debug, Clone)]
pub struct RecordingDraft {
  pub song_id: SongId,
  pub rating: Option<u8>,
  pub score: Option<u32>,
  pub accuracy: Option<f32>,
  pub media: Option<MediaUpload>,
}

/// Servicio de casos de uso del karaoke.
///
/// Orquesta los ports; no guarda ningún estado propio más allá de la
/// política de dedup del catálogo. La identidad viaja como argumento
/// en cada llamada de escritura: no existe "usuario actual" ambiente.
pub struct KaraokeService<C, R, U, B>
where
  C: SongCatalog,
  R: RecordingStore,
  U: UserStore,
  B: BlobStore,
{
  catalog: C,
  recordings: R,
  users: U,
  blobs: B,
  /// Política de creación del catálogo (ver `SongCatalog::add_song`).
  dedupe_songs: bool,
}

impl<C, R, U, B> KaraokeService<C, R, U, B>
where
  C: SongCatalog,
  R: RecordingStore,
  U: UserStore,
  B: BlobStore,
{
  pub fn new(catalog: C, recordings: R, users: U, blobs: B, dedupe_songs: bool) -> Self {
    Self { catalog, recordings, users, blobs, dedupe_songs }
  }

  // -------- COMMAND (write) --------

  /// Da de alta una canción con la política de dedup configurada.
  pub fn add_song(&self, new: NewSong) -> Result<SongId, CoreError> {
    self.catalog.add_song(new, self.dedupe_songs)
  }

  /// Alta de canción a partir de una URL de YouTube.
  ///
  /// La URL se reduce a su id de video; una URL que el parser no
  /// reconoce es `Validation`. El id extraído participa en el dedup
  /// del catálogo igual que cualquier otro.
  pub fn import_song_from_url(&self, url: &str, mut new: NewSong) -> Result<SongId, CoreError> {
    let video_id = jingle_youtube::extract_video_id(url)
      .ok_or_else(|| CoreError::Validation(format!("not a recognized YouTube URL: {url}")))?;
    new.youtube_id = Some(video_id);
    self.catalog.add_song(new, self.dedupe_songs)
  }

  /// Guarda una performance.
  ///
  /// Tres escrituras: la grabación misma, el play count de la canción
  /// y la lista de grabaciones de la cuenta. No son atómicas entre
  /// stores; las dos últimas son best-effort y su fallo (canción
  /// borrada, cuenta desconocida) no deshace la grabación ya
  /// persistida.
  pub async fn save_recording(
    &self,
    identity: &Identity,
    draft: RecordingDraft,
  ) -> Result<RecordingId, CoreError> {
    let audio_path = match &draft.media {
      Some(media) => Some(self.blobs.store(&media.bytes, &media.suggested_name).await?),
      None => None,
    };

    let id = self.recordings.add_recording(NewRecording {
      username: identity.username.clone(),
      song_id: draft.song_id,
      rating: draft.rating,
      score: draft.score,
      accuracy: draft.accuracy,
      audio_path,
    })?;

    // La grabación ya está persistida: a partir de aquí nada falla
    // hacia el caller.
    let _ = self.catalog.increment_play_count(&draft.song_id);
    let _ = self.users.append_recording(&identity.username, &id);

    Ok(id)
  }

  pub fn like_recording(&self, id: &RecordingId) -> Result<u32, CoreError> {
    self.recordings.like_recording(id)
  }

  pub fn add_comment(
    &self,
    identity: &Identity,
    id: &RecordingId,
    text: &str,
  ) -> Result<(), CoreError> {
    self.recordings.add_comment(id, &identity.username, text)
  }

  pub fn toggle_favorite(&self, identity: &Identity, song_id: &SongId) -> Result<bool, CoreError> {
    self.users.toggle_favorite(&identity.username, song_id)
  }

  pub fn delete_song(&self, id: &SongId) -> Result<bool, CoreError> {
    self.catalog.delete_song(id)
  }

  pub fn delete_recording(&self, id: &RecordingId) -> Result<bool, CoreError> {
    self.recordings.delete_recording(id)
  }

  // -------- QUERY (read) --------

  pub fn list_songs(&self, genre: Option<Genre>) -> Result<Vec<Song>, CoreError> {
    self.catalog.list_songs_by_genre(genre)
  }

  pub fn find_song(&self, id: &SongId) -> Result<Option<Song>, CoreError> {
    self.catalog.find_song(id)
  }

  pub fn top_recordings(
    &self,
    song_id: Option<&SongId>,
    limit: usize,
  ) -> Result<Vec<Recording>, CoreError> {
    self.recordings.top_recordings(song_id, limit)
  }

  /// Leaderboard listo para pantalla.
  ///
  /// Join de cada grabación con el catálogo; si la canción referida ya
  /// no existe (o no se pudo resolver) el título es el centinela
  /// "Unknown" en vez de un error.
  pub fn rankings(&self, order: RankingOrder) -> Result<Vec<LeaderboardRow>, CoreError> {
    let recordings = self.recordings.list_recordings()?;

    let mut rows = Vec::with_capacity(recordings.len());
    for rec in recordings {
      let song_title = self
        .catalog
        .find_song(&rec.song_id)?
        .map(|s| s.title)
        .unwrap_or_else(|| "Unknown".to_string());

      rows.push(LeaderboardRow {
        recording_id: rec.id,
        username: rec.username,
        song_title,
        created_at: rec.created_at,
        likes: rec.likes,
      });
    }

    match order {
      RankingOrder::Likes => {
        rows.sort_by(|a, b| b.likes.cmp(&a.likes));
      }
      RankingOrder::Insertion => {}
    }

    Ok(rows)
  }

  /// Estadísticas agregadas de la cuenta. Username desconocido =>
  /// `NotFound`.
  pub fn user_stats(&self, username: &str) -> Result<UserStats, CoreError> {
    let account = self.users.find_account(username)?.ok_or(CoreError::NotFound)?;

    let mut total_likes: u64 = 0;
    for rec_id in &account.recordings {
      if let Some(rec) = self.recordings.find_recording(rec_id)? {
        total_likes += u64::from(rec.likes);
      }
    }

    Ok(UserStats {
      recordings: account.recordings.len(),
      total_likes,
      member_since: account.created_at,
      favorites: account.favorites.len(),
    })
  }
}
