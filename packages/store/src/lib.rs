pub mod config;
pub mod error;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::ClientConfig;
pub use error::StoreError;
pub use session::{KeyValueStore, Session, SessionStore, IDENTITY_KEY, TOKEN_KEY};
