//! Route-level session guard component.
//!
//! Wraps the routed page. On every distinct path it runs
//! [`session::SessionGuard`] against the shared store, issues at most one
//! navigation, and renders the page only once that path has been allowed.
//! Until then a loading indicator is shown, so protected content never
//! flashes for a visitor who is about to be redirected.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus::router::Navigator;
use session::{GuardSettings, GuardState, RouteTable};

use crate::context::{use_config, use_store};
use crate::loader::Loader;
use crate::platform::SharedStore;

type Guard = session::SessionGuard<SharedStore, RouteTable>;

/// Adapts the router's navigator to the guard's navigation seam.
struct RouterNavigator(Navigator);

impl session::Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        tracing::debug!(target_path = path, "Guard navigating");
        self.0.push(path.to_string());
    }
}

#[component]
pub fn SessionGuard(path: String, children: Element) -> Element {
    let config = use_config();
    let store = use_store();
    let nav = use_navigator();
    let guard = use_hook(|| {
        Rc::new(RefCell::new(Guard::new(
            store,
            RouteTable::from_config(&config.routes),
            GuardSettings::from_config(&config),
        )))
    });
    let mut state = use_signal(|| GuardState::Resolving);

    let effect_guard = guard.clone();
    use_effect(use_reactive((&path,), move |(path,)| {
        let next = effect_guard
            .borrow_mut()
            .on_path_change(&path, &RouterNavigator(nav));
        state.set(next);
    }));

    // Subscribe so a new verdict re-renders this component.
    let _ = state.read();
    let allowed = guard.borrow().allows(&path);

    if allowed {
        rsx! { {children} }
    } else {
        rsx! { Loader {} }
    }
}
