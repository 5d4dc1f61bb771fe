//! Application-wide context: configuration, session store and REST client.

use api::ApiClient;
use dioxus::prelude::*;
use session::GuardSettings;
use store::JobfairConfig;

use crate::platform::{load_config, make_store, SharedStore};

pub type Api = ApiClient<SharedStore>;

pub fn use_config() -> JobfairConfig {
    use_context::<JobfairConfig>()
}

pub fn use_store() -> SharedStore {
    use_context::<SharedStore>()
}

pub fn use_api() -> Api {
    use_context::<Api>()
}

pub fn use_guard_settings() -> GuardSettings {
    GuardSettings::from_config(&use_config())
}

/// Provides [`JobfairConfig`], [`SharedStore`] and [`Api`] to `children`.
/// Must sit above every other provider and page.
#[component]
pub fn AppProvider(children: Element) -> Element {
    let config = use_context_provider(load_config);
    let store = use_context_provider(make_store);
    let failure = use_hook(|| match ApiClient::new(&config, store.clone()) {
        Ok(api) => {
            provide_context(api);
            None
        }
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            Some(e.to_string())
        }
    });

    match failure {
        None => rsx! { {children} },
        Some(message) => rsx! {
            div { class: "fatal-error", "Unable to start: {message}" }
        },
    }
}
