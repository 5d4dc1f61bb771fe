use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBriefcase, FaUser};
use dioxus_free_icons::Icon;
use session::route::same_path;

use crate::auth::{use_auth, LogoutButton};

/// Primary navigation entries as `(label, path)`.
pub const NAV_ITEMS: [(&str, &str); 3] = [
    ("Home", "/"),
    ("Companies", "/company"),
    ("Bookings", "/booking"),
];

/// Pages that render full-screen without the navbar.
const BARE_PAGES: [&str; 2] = ["/login", "/register"];

pub fn navbar_visible(path: &str) -> bool {
    !BARE_PAGES.iter().any(|bare| same_path(bare, path))
}

#[component]
pub fn Navbar(path: String) -> Element {
    let auth = use_auth();

    if !navbar_visible(&path) {
        return rsx! {};
    }

    let state = auth();

    rsx! {
        nav {
            class: "navbar",
            Link {
                to: "/",
                class: "navbar-brand",
                Icon { icon: FaBriefcase, width: 16, height: 16 }
                span { "Job Fair" }
            }
            div {
                class: "navbar-links",
                for (label, href) in NAV_ITEMS {
                    Link {
                        key: "{href}",
                        to: href,
                        class: if same_path(href, &path) { "nav-link active" } else { "nav-link" },
                        "{label}"
                    }
                }
                if state.is_admin() {
                    Link {
                        to: "/admin",
                        class: if same_path("/admin", &path) { "nav-link active" } else { "nav-link" },
                        "Admin"
                    }
                }
            }
            div {
                class: "navbar-user",
                if let Some(user) = state.user.as_ref() {
                    Link {
                        to: "/profile",
                        class: "nav-link",
                        title: "{user.email}",
                        Icon { icon: FaUser, width: 14, height: 14 }
                        span { "{user.display_name()}" }
                    }
                    LogoutButton { label: "Log out", class: "btn btn-ghost" }
                } else if !state.loading {
                    Link { to: "/login", class: "btn btn-ghost", "Log in" }
                }
            }
        }
    }
}
