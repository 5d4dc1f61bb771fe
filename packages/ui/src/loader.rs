use dioxus::prelude::*;

/// Full-page spinner shown while a route is being resolved or data loads.
#[component]
pub fn Loader(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "loader",
            role: "status",
            div { class: "loader-spinner" }
            p { class: "loader-message", "{message}" }
        }
    }
}

/// Small inline spinner for buttons and table cells.
#[component]
pub fn InlineLoading() -> Element {
    rsx! {
        span { class: "loader-inline", aria_hidden: "true" }
    }
}
