use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "not-found",
            h1 { "404" }
            p { "The page {path} could not be found." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Go home" }
        }
    }
}
