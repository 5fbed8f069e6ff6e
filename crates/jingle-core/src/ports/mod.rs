pub mod blob_store;
pub mod identity;
pub mod recording_store;
pub mod song_catalog;
pub mod user_store;

pub use blob_store::BlobStore;
pub use identity::IdentityProvider;
pub use recording_store::RecordingStore;
pub use song_catalog::SongCatalog;
pub use user_store::UserStore;
