//! Client-side session handling: reading the bearer credential, classifying
//! routes, and the [`SessionGuard`] that decides render-or-redirect on every
//! navigation.
//!
//! Only three code paths ever write the credential: [`login`], [`logout`],
//! and the guard itself when it discards an expired or unreadable one.

pub mod credential;
mod error;
pub mod guard;
pub mod route;

pub use credential::{Claims, Credential};
pub use error::CredentialError;
pub use guard::{GuardSettings, GuardState, Navigator, SessionGuard};
pub use route::{RouteClass, RouteClassifier, RouteTable};

use store::SessionStore;
use tracing::info;

/// Persist a credential issued by the backend after login or registration.
pub fn login(store: &impl SessionStore, settings: &GuardSettings, token: &str) {
    store.set(&settings.token_key, token);
    info!("Session credential stored");
}

/// Drop the stored credential.
pub fn logout(store: &impl SessionStore, settings: &GuardSettings) {
    store.remove(&settings.token_key);
    info!("Session credential removed");
}

/// The stored credential if present, non-empty and not expired.
pub fn current_credential(store: &impl SessionStore, settings: &GuardSettings) -> Option<Credential> {
    let token = store.get(&settings.token_key).filter(|t| !t.is_empty())?;
    Credential::decode(&token)
        .ok()
        .filter(|c| !c.is_expired_at(chrono::Utc::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use store::MemoryStore;

    #[test]
    fn test_login_then_logout() {
        let store = MemoryStore::new();
        let settings = GuardSettings::default();

        login(&store, &settings, "abc");
        assert_eq!(store.get("token").as_deref(), Some("abc"));

        logout(&store, &settings);
        assert!(store.get("token").is_none());
    }

    #[test]
    fn test_current_credential() {
        let store = MemoryStore::new();
        let settings = GuardSettings::default();
        assert!(current_credential(&store, &settings).is_none());

        let future = chrono::Utc::now().timestamp() + 3600;
        login(&store, &settings, &credential::encode_unsigned(&json!({ "exp": future })));
        assert!(current_credential(&store, &settings).is_some());

        login(&store, &settings, &credential::encode_unsigned(&json!({ "exp": 1 })));
        assert!(current_credential(&store, &settings).is_none());

        login(&store, &settings, "garbage");
        assert!(current_credential(&store, &settings).is_none());
    }
}
