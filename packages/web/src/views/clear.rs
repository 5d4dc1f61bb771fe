//! Debug page: wipes every locally stored value, then returns to login.

use dioxus::prelude::*;
use ui::{use_config, use_refresh_auth, use_store};

#[component]
pub fn Clear() -> Element {
    let store = use_store();
    let config = use_config();
    let refresh = use_refresh_auth();
    let nav = use_navigator();
    let mut cleared = use_signal(|| Option::<usize>::None);

    use_effect(move || {
        if cleared.peek().is_some() {
            return;
        }
        let count = store.clear_all();
        tracing::info!(count, "Cleared local storage");
        cleared.set(Some(count));
        refresh.call(());
        nav.replace(config.routes.login.clone());
    });

    rsx! {
        div {
            class: "card",
            h1 { "Clearing local data" }
            match cleared() {
                Some(count) => rsx! { p { "Cleared {count} stored item(s). Redirecting to login..." } },
                None => rsx! { p { "Clearing local storage..." } },
            }
        }
    }
}
