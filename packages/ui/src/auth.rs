//! Authentication context and hooks for the UI.

use api::User;
use dioxus::prelude::*;

use crate::context::{use_api, use_guard_settings, use_store};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

/// Bumped whenever the stored credential changes so the profile is refetched.
#[derive(Clone, Copy)]
struct SessionEpoch(Signal<u64>);

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_is_admin() -> bool {
    use_auth().read().is_admin()
}

/// Returns a callback that refetches `auth/me` against the current credential.
/// Call it after anything that writes or removes the stored token.
pub fn use_refresh_auth() -> Callback<()> {
    let SessionEpoch(mut epoch) = use_context::<SessionEpoch>();
    use_callback(move |_| *epoch.write() += 1)
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let api = use_api();
    let store = use_store();
    let settings = use_guard_settings();
    let mut auth_state = use_signal(AuthState::default);
    let epoch = use_signal(|| 0u64);

    let _ = use_resource(move || {
        // Subscribe before the first await.
        let _ = epoch();
        let api = api.clone();
        let credential = session::current_credential(&store, &settings);
        async move {
            if credential.is_none() {
                auth_state.set(AuthState { user: None, loading: false });
                return;
            }
            auth_state.with_mut(|state| state.loading = true);
            match api.me().await {
                Ok(user) => {
                    tracing::debug!(user = %user.id, admin = user.is_admin(), "Loaded profile");
                    auth_state.set(AuthState { user: Some(user), loading: false });
                }
                Err(e) => {
                    tracing::warn!("Failed to load profile: {}", e);
                    auth_state.set(AuthState { user: None, loading: false });
                }
            }
        }
    });

    use_context_provider(|| auth_state);
    use_context_provider(|| SessionEpoch(epoch));

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let api = use_api();
    let mut auth_state = use_auth();
    let refresh = use_refresh_auth();
    let nav = use_navigator();

    let onclick = move |_| {
        api.logout();
        auth_state.set(AuthState { user: None, loading: false });
        refresh.call(());
        nav.push("/");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
