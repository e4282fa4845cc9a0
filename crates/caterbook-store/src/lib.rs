pub mod backend;
pub mod error;
pub mod store;

pub use backend::{default_data_dir, FileBackend, KeyValue, MemoryBackend};
pub use error::StoreError;
pub use store::{DocumentStore, StoreData, STORAGE_KEY};
