//! Landing page.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        header {
            class: "hero",
            h1 { "Online Job Fair" }
            p { "Meet the companies you want to work for, and book your interview slot in seconds." }
        }

        div {
            class: "grid",
            div {
                class: "card",
                h2 { "For Job Seekers" }
                ul {
                    li { "Browse companies from various industries" }
                    li { "Schedule up to {api::scheduling::MAX_BOOKINGS_PER_USER} interview sessions" }
                    li { "Manage your bookings easily" }
                }
                Link { to: Route::Register {}, class: "btn btn-ghost", "Register" }
            }
            div {
                class: "card",
                h2 { "Join as JobFair Admin" }
                ul {
                    li { "Create and manage job fairs" }
                    li { "View and manage company registrations" }
                    li { "Oversee the entire job fair process" }
                }
                Link { to: Route::Enroll {}, class: "btn btn-ghost", "Enroll your company" }
            }
        }

        div {
            class: "hero-cta",
            Link { to: Route::Companies {}, class: "btn btn-primary", "Explore companies" }
        }
    }
}
