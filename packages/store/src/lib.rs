//! Client-local key/value persistence and application configuration.
//!
//! The session credential lives in whatever [`SessionStore`] the host
//! platform provides:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`LocalStorageStore`] | browser (`wasm32` + `web` feature) |
//! | [`FileStore`] | native desktop / CLI |
//! | [`MemoryStore`] | tests and fallback |

pub mod config;
mod error;
mod session_store;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::{ApiConfig, JobfairConfig, RoutesConfig, SessionConfig};
pub use error::StoreError;
pub use session_store::SessionStore;
