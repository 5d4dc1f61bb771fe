use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::{AppProvider, AuthProvider, Navbar, SessionGuard};
use views::{
    Admin, Bookings, Clear, Companies, CompanyDetail, Enroll, Home, Login, NotFound, Profile,
    Register,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/enroll")]
        Enroll {},
        #[route("/company")]
        Companies {},
        #[route("/company/:id")]
        CompanyDetail { id: String },
        #[route("/booking")]
        Bookings {},
        #[route("/profile")]
        Profile {},
        #[route("/admin")]
        Admin {},
        #[route("/clear")]
        Clear {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialise logging: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProvider {
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Guarded navbar and page outlet. Every route renders through here.
#[component]
fn Shell() -> Element {
    let path = use_route::<Route>().to_string();

    rsx! {
        SessionGuard {
            path: path.clone(),
            Navbar { path }
            main {
                class: "page",
                Outlet::<Route> {}
            }
        }
    }
}
