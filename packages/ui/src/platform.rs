//! Platform constructors for the session store and configuration.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): one file per key under `<data_dir>/jobfair/`
//! - **Anything else**: an in-memory store that forgets on reload

use std::rc::Rc;

use store::{JobfairConfig, SessionStore};

/// Session store shared by every component through context.
pub type SharedStore = Rc<dyn SessionStore>;

pub fn make_store() -> SharedStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorageStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(store::FileStore::new(app_dir(dirs::data_dir())))
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Rc::new(store::MemoryStore::new())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn app_dir(base: Option<std::path::PathBuf>) -> std::path::PathBuf {
    base.unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("jobfair")
}

/// Load `jobfair.toml` from the platform config directory. The browser build
/// has no such directory and always uses the compiled-in defaults.
pub fn load_config() -> JobfairConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = app_dir(dirs::config_dir()).join(JobfairConfig::filename());
        match JobfairConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Ignoring unreadable config: {}", e);
                JobfairConfig::default()
            }
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        JobfairConfig::default()
    }
}
