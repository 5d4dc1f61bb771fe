//! This crate contains all shared UI for the workspace.

mod platform;
pub use platform::{load_config, make_store, SharedStore};

mod context;
pub use context::{use_api, use_config, use_guard_settings, use_store, Api, AppProvider};

mod auth;
pub use auth::{use_auth, use_is_admin, use_refresh_auth, AuthProvider, AuthState, LogoutButton};

mod guard;
pub use guard::SessionGuard;

pub mod datetime;

mod loader;
pub use loader::{InlineLoading, Loader};

mod navbar;
pub use navbar::{navbar_visible, Navbar, NAV_ITEMS};

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
