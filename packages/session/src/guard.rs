//! # Session guard — render-or-redirect on every path change
//!
//! [`SessionGuard`] decides, for each new path, whether the page tree may be
//! rendered or the user must be sent elsewhere:
//!
//! | Route | Credential | Verdict |
//! |-------|------------|---------|
//! | public | valid | redirect to `authenticated_home` |
//! | public | absent / invalid | allow |
//! | protected | absent | redirect to `login` |
//! | protected | malformed or expired | erase credential, redirect to `login` |
//! | protected | valid | allow |
//!
//! A redirect whose target is the current path resolves to [`GuardState::Allow`]
//! instead, and re-announcing the path that was last evaluated is a no-op.
//! Together these guarantee at most one `navigate` call per path change and
//! rule out redirect loops.
//!
//! Decode failures never leave this module: they are logged and handled
//! exactly like an expired credential.

use chrono::{DateTime, Utc};
use store::{JobfairConfig, SessionStore};
use tracing::{debug, warn};

use crate::credential::Credential;
use crate::route::{normalize_path, same_path, RouteClass, RouteClassifier};

/// Per-navigation resolution state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    /// Path changed, verdict not reached yet. Render nothing.
    Resolving,
    /// Render the page tree.
    Allow,
    /// A navigation to `target` was issued. Render nothing.
    Redirecting { target: String },
}

/// Navigation service the guard redirects through.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// Storage key and redirect targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardSettings {
    pub token_key: String,
    /// Where a signed-in user landing on a public page is sent.
    pub authenticated_home: String,
    /// Where an anonymous user landing on a protected page is sent.
    pub login: String,
}

impl GuardSettings {
    pub fn from_config(config: &JobfairConfig) -> Self {
        Self {
            token_key: config.session.token_key.clone(),
            authenticated_home: config.routes.authenticated_home.clone(),
            login: config.routes.login.clone(),
        }
    }
}

impl Default for GuardSettings {
    fn default() -> Self {
        Self::from_config(&JobfairConfig::default())
    }
}

pub struct SessionGuard<S, C> {
    store: S,
    classifier: C,
    settings: GuardSettings,
    path: Option<String>,
    state: GuardState,
}

impl<S: SessionStore, C: RouteClassifier> SessionGuard<S, C> {
    pub fn new(store: S, classifier: C, settings: GuardSettings) -> Self {
        Self {
            store,
            classifier,
            settings,
            path: None,
            state: GuardState::Resolving,
        }
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    pub fn settings(&self) -> &GuardSettings {
        &self.settings
    }

    /// Path the current state was computed for.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// True only when the verdict for exactly `path` is [`GuardState::Allow`].
    ///
    /// The host renders children on this, so a page never mounts under the
    /// verdict computed for the previous path.
    pub fn allows(&self, path: &str) -> bool {
        self.state == GuardState::Allow
            && self.path.as_deref().is_some_and(|p| same_path(p, path))
    }

    /// Evaluate `path` against the stored credential, using the system clock.
    pub fn on_path_change(&mut self, path: &str, navigator: &impl Navigator) -> GuardState {
        self.on_path_change_at(path, Utc::now(), navigator)
    }

    /// Evaluate `path` at instant `now`.
    ///
    /// Re-announcing the path already evaluated returns the existing state
    /// without touching storage or the navigator.
    pub fn on_path_change_at(
        &mut self,
        path: &str,
        now: DateTime<Utc>,
        navigator: &impl Navigator,
    ) -> GuardState {
        if let Some(previous) = self.path.as_deref() {
            if same_path(previous, path) && self.state != GuardState::Resolving {
                return self.state.clone();
            }
        }

        self.path = Some(normalize_path(path).to_string());
        self.state = GuardState::Resolving;

        self.state = match self.resolve(path, now) {
            None => GuardState::Allow,
            Some(target) if same_path(&target, path) => {
                debug!(path, "Redirect target is current path, allowing");
                GuardState::Allow
            }
            Some(target) => {
                debug!(path, target = %target, "Redirecting");
                navigator.navigate(&target);
                GuardState::Redirecting { target }
            }
        };
        self.state.clone()
    }

    /// Forget the last evaluated path so the next announcement re-runs the
    /// full evaluation, e.g. after signing in on the current page.
    pub fn reset(&mut self) {
        self.path = None;
        self.state = GuardState::Resolving;
    }

    /// Redirect target for `path`, or `None` to allow.
    fn resolve(&self, path: &str, now: DateTime<Utc>) -> Option<String> {
        let token = self.token();

        match self.classifier.classify(path) {
            RouteClass::Public => {
                let signed_in = match token.as_deref().map(Credential::decode) {
                    Some(Ok(credential)) => !credential.is_expired_at(now),
                    Some(Err(e)) => {
                        debug!(path, error = %e, "Unreadable credential on public route");
                        false
                    }
                    None => false,
                };
                if signed_in {
                    Some(self.settings.authenticated_home.clone())
                } else {
                    None
                }
            }
            RouteClass::Protected => {
                let Some(token) = token else {
                    debug!(path, "No credential for protected route");
                    return Some(self.settings.login.clone());
                };
                match Credential::decode(&token) {
                    Ok(credential) if !credential.is_expired_at(now) => None,
                    Ok(credential) => {
                        warn!(path, expired_at = %credential.expires_at(), "Credential expired");
                        self.store.remove(&self.settings.token_key);
                        Some(self.settings.login.clone())
                    }
                    Err(e) => {
                        warn!(path, error = %e, "Discarding unreadable credential");
                        self.store.remove(&self.settings.token_key);
                        Some(self.settings.login.clone())
                    }
                }
            }
        }
    }

    /// Stored credential; an empty string counts as absent.
    fn token(&self) -> Option<String> {
        self.store
            .get(&self.settings.token_key)
            .filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::Duration;
    use serde_json::json;
    use store::MemoryStore;

    use super::*;
    use crate::credential::encode_unsigned;
    use crate::route::RouteTable;

    /// Navigator that records every call.
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
    }

    impl Navigator for Recorder {
        fn navigate(&self, path: &str) {
            self.calls.borrow_mut().push(path.to_string());
        }
    }

    impl Recorder {
        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_800_000_000, 0).unwrap()
    }

    fn token_expiring_in(seconds: i64) -> String {
        encode_unsigned(&json!({ "id": "u1", "exp": (now() + Duration::seconds(seconds)).timestamp() }))
    }

    fn guard(store: &MemoryStore) -> SessionGuard<MemoryStore, RouteTable> {
        SessionGuard::new(store.clone(), RouteTable::default(), GuardSettings::default())
    }

    #[test]
    fn test_no_token_protected_redirects_to_login() {
        let store = MemoryStore::new();
        let nav = Recorder::default();
        let mut guard = guard(&store);

        let state = guard.on_path_change_at("/company", now(), &nav);

        assert_eq!(state, GuardState::Redirecting { target: "/login".into() });
        assert_eq!(nav.calls(), vec!["/login"]);
        assert!(!guard.allows("/company"));
    }

    #[test]
    fn test_valid_token_protected_allows() {
        let store = MemoryStore::with_entry("token", &token_expiring_in(3600));
        let nav = Recorder::default();
        let mut guard = guard(&store);

        let state = guard.on_path_change_at("/booking", now(), &nav);

        assert_eq!(state, GuardState::Allow);
        assert!(nav.calls().is_empty());
        assert!(guard.allows("/booking"));
        assert!(store.get("token").is_some());
    }

    #[test]
    fn test_expired_token_protected_is_removed() {
        let store = MemoryStore::with_entry("token", &token_expiring_in(-10));
        let nav = Recorder::default();
        let mut guard = guard(&store);

        let state = guard.on_path_change_at("/booking", now(), &nav);

        assert_eq!(state, GuardState::Redirecting { target: "/login".into() });
        assert_eq!(nav.calls(), vec!["/login"]);
        assert!(store.get("token").is_none());
    }

    #[test]
    fn test_token_expiring_exactly_now_is_expired() {
        let store = MemoryStore::with_entry("token", &token_expiring_in(0));
        let nav = Recorder::default();
        let mut guard = guard(&store);

        guard.on_path_change_at("/booking", now(), &nav);

        assert_eq!(nav.calls(), vec!["/login"]);
        assert!(store.get("token").is_none());
    }

    #[test]
    fn test_valid_token_public_redirects_home() {
        let store = MemoryStore::with_entry("token", &token_expiring_in(3600));
        let nav = Recorder::default();
        let mut guard = guard(&store);

        let state = guard.on_path_change_at("/login", now(), &nav);

        assert_eq!(state, GuardState::Redirecting { target: "/company".into() });
        assert_eq!(nav.calls(), vec!["/company"]);
        assert!(!guard.allows("/login"));
    }

    #[test]
    fn test_no_token_public_allows() {
        let store = MemoryStore::new();
        let nav = Recorder::default();
        let mut guard = guard(&store);

        let state = guard.on_path_change_at("/", now(), &nav);

        assert_eq!(state, GuardState::Allow);
        assert!(nav.calls().is_empty());
        assert!(guard.allows("/"));
    }

    #[test]
    fn test_malformed_token_protected_is_removed() {
        let store = MemoryStore::with_entry("token", "not-a-valid-token");
        let nav = Recorder::default();
        let mut guard = guard(&store);

        let state = guard.on_path_change_at("/booking", now(), &nav);

        assert_eq!(state, GuardState::Redirecting { target: "/login".into() });
        assert_eq!(nav.calls(), vec!["/login"]);
        assert!(store.get("token").is_none());
    }

    #[test]
    fn test_non_base64_token_protected_is_removed() {
        let store = MemoryStore::with_entry("token", "aaa.@@@@.ccc");
        let nav = Recorder::default();
        let mut guard = guard(&store);

        guard.on_path_change_at("/company/7", now(), &nav);

        assert_eq!(nav.calls(), vec!["/login"]);
        assert!(store.get("token").is_none());
    }

    #[test]
    fn test_token_without_exp_is_invalid() {
        let store = MemoryStore::with_entry("token", &encode_unsigned(&json!({ "id": "u1" })));
        let nav = Recorder::default();
        let mut guard = guard(&store);

        guard.on_path_change_at("/booking", now(), &nav);

        assert_eq!(nav.calls(), vec!["/login"]);
        assert!(store.get("token").is_none());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let store = MemoryStore::with_entry("token", "");
        let nav = Recorder::default();
        let mut guard = guard(&store);

        assert_eq!(guard.on_path_change_at("/", now(), &nav), GuardState::Allow);

        let mut guard = self::guard(&store);
        guard.on_path_change_at("/booking", now(), &nav);
        assert_eq!(nav.calls(), vec!["/login"]);
    }

    #[test]
    fn test_invalid_token_on_public_route_is_left_alone() {
        let store = MemoryStore::with_entry("token", &token_expiring_in(-10));
        let nav = Recorder::default();
        let mut guard = guard(&store);

        let state = guard.on_path_change_at("/register", now(), &nav);

        assert_eq!(state, GuardState::Allow);
        assert!(nav.calls().is_empty());
        // Only the protected branch erases credentials
        assert!(store.get("token").is_some());
    }

    #[test]
    fn test_malformed_token_on_public_route_is_kept() {
        let store = MemoryStore::with_entry("token", "x.y");
        let nav = Recorder::default();
        let mut guard = guard(&store);

        let state = guard.on_path_change_at("/enroll", now(), &nav);

        assert_eq!(state, GuardState::Allow);
        assert!(nav.calls().is_empty());
        assert_eq!(store.get("token").as_deref(), Some("x.y"));

        // The protected branch is what finally discards it.
        guard.on_path_change_at("/company", now(), &nav);
        assert_eq!(nav.calls(), vec!["/login"]);
        assert!(store.get("token").is_none());
    }

    #[test]
    fn test_redirect_to_current_path_allows() {
        // A login page that is itself protected would otherwise loop.
        let store = MemoryStore::new();
        let nav = Recorder::default();
        let mut guard = SessionGuard::new(
            store,
            RouteTable::new(["/"]),
            GuardSettings::default(),
        );

        let state = guard.on_path_change_at("/login", now(), &nav);

        assert_eq!(state, GuardState::Allow);
        assert!(nav.calls().is_empty());
        assert!(guard.allows("/login"));
    }

    #[test]
    fn test_home_that_is_public_does_not_loop() {
        let store = MemoryStore::with_entry("token", &token_expiring_in(3600));
        let nav = Recorder::default();
        let settings = GuardSettings {
            authenticated_home: "/".into(),
            ..GuardSettings::default()
        };
        let mut guard = SessionGuard::new(store, RouteTable::default(), settings);

        assert_eq!(guard.on_path_change_at("/", now(), &nav), GuardState::Allow);
        assert!(nav.calls().is_empty());
    }

    #[test]
    fn test_same_path_is_evaluated_once() {
        let store = MemoryStore::new();
        let nav = Recorder::default();
        let mut guard = guard(&store);

        guard.on_path_change_at("/company", now(), &nav);
        guard.on_path_change_at("/company", now(), &nav);
        guard.on_path_change_at("/company/", now(), &nav);

        assert_eq!(nav.calls(), vec!["/login"]);
    }

    #[test]
    fn test_follow_redirect_settles() {
        let store = MemoryStore::new();
        let nav = Recorder::default();
        let mut guard = guard(&store);

        guard.on_path_change_at("/admin", now(), &nav);
        // Router follows the redirect
        let state = guard.on_path_change_at("/login", now(), &nav);

        assert_eq!(state, GuardState::Allow);
        assert_eq!(nav.calls(), vec!["/login"]);
        assert!(guard.allows("/login"));
        assert!(!guard.allows("/admin"));
    }

    #[test]
    fn test_new_path_reevaluates_against_current_store() {
        let store = MemoryStore::new();
        let nav = Recorder::default();
        let mut guard = guard(&store);

        assert_eq!(guard.on_path_change_at("/login", now(), &nav), GuardState::Allow);

        // Sign-in flow stores a credential and navigates home
        store.set("token", &token_expiring_in(3600));
        assert_eq!(guard.on_path_change_at("/", now(), &nav), GuardState::Redirecting {
            target: "/company".into()
        });
        assert_eq!(guard.on_path_change_at("/company", now(), &nav), GuardState::Allow);
        assert_eq!(nav.calls(), vec!["/company"]);
    }

    #[test]
    fn test_reset_forces_reevaluation() {
        let store = MemoryStore::new();
        let nav = Recorder::default();
        let mut guard = guard(&store);

        assert_eq!(guard.on_path_change_at("/login", now(), &nav), GuardState::Allow);
        store.set("token", &token_expiring_in(3600));

        // Same path: cached verdict
        assert_eq!(guard.on_path_change_at("/login", now(), &nav), GuardState::Allow);

        guard.reset();
        assert_eq!(
            guard.on_path_change_at("/login", now(), &nav),
            GuardState::Redirecting { target: "/company".into() }
        );
    }

    #[test]
    fn test_custom_token_key() {
        let store = MemoryStore::with_entry("authToken", &token_expiring_in(60));
        let nav = Recorder::default();
        let settings = GuardSettings {
            token_key: "authToken".into(),
            ..GuardSettings::default()
        };
        let mut guard = SessionGuard::new(store, RouteTable::default(), settings);

        assert_eq!(guard.on_path_change_at("/booking", now(), &nav), GuardState::Allow);
    }

    #[test]
    fn test_closure_navigator() {
        let store = MemoryStore::new();
        let target = RefCell::new(None);
        let nav = |path: &str| *target.borrow_mut() = Some(path.to_string());
        let mut guard = guard(&store);

        guard.on_path_change_at("/profile", now(), &nav);

        assert_eq!(target.borrow().as_deref(), Some("/login"));
    }

    #[test]
    fn test_every_protected_path_without_token_redirects_once() {
        for path in ["/company", "/company/abc", "/booking", "/bookings", "/profile", "/admin", "/clear"] {
            let store = MemoryStore::new();
            let nav = Recorder::default();
            let mut guard = guard(&store);

            guard.on_path_change_at(path, now(), &nav);

            assert_eq!(nav.calls(), vec!["/login"], "{path}");
            assert!(!guard.allows(path), "{path}");
        }
    }

    #[test]
    fn test_every_public_path_with_valid_token_redirects_home() {
        for path in ["/", "/login", "/register", "/enroll"] {
            let store = MemoryStore::with_entry("token", &token_expiring_in(3600));
            let nav = Recorder::default();
            let mut guard = guard(&store);

            guard.on_path_change_at(path, now(), &nav);

            assert_eq!(nav.calls(), vec!["/company"], "{path}");
        }
    }

    #[test]
    fn test_settings_follow_config() {
        let mut config = JobfairConfig::default();
        config.session.token_key = "jwt".into();
        config.routes.login = "/signin".into();

        let settings = GuardSettings::from_config(&config);
        assert_eq!(settings.token_key, "jwt");
        assert_eq!(settings.login, "/signin");
        assert_eq!(settings.authenticated_home, "/company");
    }
}
