use std::path::PathBuf;

use chrono::Utc;

use jingle_core::CoreError;
use jingle_core::auth::{AuthProvider, Identity};
use jingle_core::domain::account::Account;
use jingle_core::domain::ids::{RecordingId, SongId};
use jingle_core::ports::UserStore;

use crate::document::JsonDocument;

/// Almacén de cuentas sobre `users.json`.
///
/// Las contraseñas se comparan en claro, igual que se guardan:
/// endurecer la autenticación queda fuera del alcance del núcleo.
pub struct JsonUserStore {
  doc: JsonDocument<Vec<Account>>,
}

impl JsonUserStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { doc: JsonDocument::new(path) }
  }
}

impl UserStore for JsonUserStore {
  fn register(
    &self,
    username: &str,
    password: &str,
    email: Option<&str>,
  ) -> Result<(), CoreError> {
    if username.is_empty() || password.is_empty() {
      return Err(CoreError::Validation("username and password are required".into()));
    }

    let guard = self.doc.lock();
    let mut accounts = guard.load()?;

    if accounts.iter().any(|a| a.username == username) {
      return Err(CoreError::Conflict(format!("username already exists: {username}")));
    }

    accounts.push(Account {
      username: username.to_string(),
      password: password.to_string(),
      email: email.map(str::to_string),
      created_at: Utc::now(),
      recordings: Vec::new(),
      favorites: Vec::new(),
    });

    guard.store(&accounts)
  }

  fn append_recording(&self, username: &str, id: &RecordingId) -> Result<bool, CoreError> {
    let guard = self.doc.lock();
    let mut accounts = guard.load()?;

    let Some(account) = accounts.iter_mut().find(|a| a.username == username) else {
      return Ok(false);
    };
    account.recordings.push(*id);

    guard.store(&accounts)?;
    Ok(true)
  }

  fn toggle_favorite(&self, username: &str, song_id: &SongId) -> Result<bool, CoreError> {
    let guard = self.doc.lock();
    let mut accounts = guard.load()?;

    let account =
      accounts.iter_mut().find(|a| a.username == username).ok_or(CoreError::NotFound)?;

    let favored = if let Some(pos) = account.favorites.iter().position(|s| s == song_id) {
      account.favorites.remove(pos);
      false
    } else {
      account.favorites.push(*song_id);
      true
    };

    guard.store(&accounts)?;
    Ok(favored)
  }

  fn authenticate(&self, username: &str, password: &str) -> Result<Identity, CoreError> {
    let accounts = self.doc.lock().load()?;

    let account = accounts.iter().find(|a| a.username == username).ok_or(CoreError::NotFound)?;
    if account.password != password {
      return Err(CoreError::Unauthorized);
    }

    Ok(Identity { username: account.username.clone(), provider: AuthProvider::Password })
  }

  fn find_account(&self, username: &str) -> Result<Option<Account>, CoreError> {
    let accounts = self.doc.lock().load()?;
    Ok(accounts.into_iter().find(|a| a.username == username))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  fn store(dir: &std::path::Path) -> JsonUserStore {
    JsonUserStore::new(dir.join("users.json"))
  }

  #[test]
  fn register_validates_required_fields() {
    let tmp = tempdir().unwrap();
    let users = store(tmp.path());

    assert!(matches!(users.register("", "pw", None), Err(CoreError::Validation(_))));
    assert!(matches!(users.register("carla", "", None), Err(CoreError::Validation(_))));
  }

  #[test]
  fn duplicate_username_is_a_conflict() {
    let tmp = tempdir().unwrap();
    let users = store(tmp.path());

    users.register("carla", "pw", Some("carla@example.com")).unwrap();
    let err = users.register("carla", "otra", None).unwrap_err();
    assert!(matches!(err, CoreError::Conflict(_)));
  }

  #[test]
  fn authenticate_distinguishes_unknown_from_wrong_password() {
    let tmp = tempdir().unwrap();
    let users = store(tmp.path());
    users.register("carla", "pw", None).unwrap();

    assert!(matches!(users.authenticate("nadie", "pw"), Err(CoreError::NotFound)));
    assert!(matches!(users.authenticate("carla", "mal"), Err(CoreError::Unauthorized)));

    let id = users.authenticate("carla", "pw").unwrap();
    assert_eq!(id.username, "carla");
    assert_eq!(id.provider, AuthProvider::Password);
  }

  #[test]
  fn new_accounts_start_with_empty_lists() {
    let tmp = tempdir().unwrap();
    let users = store(tmp.path());
    users.register("carla", "pw", None).unwrap();

    let account = users.find_account("carla").unwrap().unwrap();
    assert!(account.recordings.is_empty());
    assert!(account.favorites.is_empty());
  }

  #[test]
  fn append_recording_is_best_effort_on_unknown_user() {
    let tmp = tempdir().unwrap();
    let users = store(tmp.path());
    users.register("carla", "pw", None).unwrap();

    let rec = RecordingId::new();
    assert!(users.append_recording("carla", &rec).unwrap());
    assert!(!users.append_recording("nadie", &rec).unwrap());

    let account = users.find_account("carla").unwrap().unwrap();
    assert_eq!(account.recordings, vec![rec]);
  }

  #[test]
  fn toggle_favorite_round_trips() {
    let tmp = tempdir().unwrap();
    let users = store(tmp.path());
    users.register("carla", "pw", None).unwrap();

    let song = SongId::new();
    assert!(users.toggle_favorite("carla", &song).unwrap());
    assert!(!users.toggle_favorite("carla", &song).unwrap());
    assert!(users.toggle_favorite("carla", &song).unwrap());
    assert_eq!(users.find_account("carla").unwrap().unwrap().favorites, vec![song]);

    assert!(matches!(
      users.toggle_favorite("nadie", &song),
      Err(CoreError::NotFound)
    ));
  }
}
