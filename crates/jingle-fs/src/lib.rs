pub mod blob;
pub mod io;

pub use blob::FsBlobStore;
pub use io::atomic_write_str;
