//! Login page view with email/password form.

use api::{LoginForm, ValidationErrors};
use dioxus::prelude::*;
use ui::{use_api, use_config, use_refresh_auth};

use super::field::Field;
use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let config = use_config();
    let refresh = use_refresh_auth();
    let nav = use_navigator();
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut errors = use_signal(ValidationErrors::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let form = LoginForm {
            email: email(),
            password: password(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        error.set(None);

        let api = api.clone();
        let home = config.routes.authenticated_home.clone();
        spawn(async move {
            loading.set(true);
            match api.login(&request).await {
                Ok(_) => {
                    refresh.call(());
                    nav.push(home);
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Welcome back" }
            p { "Sign in to book your interview slots." }

            form {
                class: "form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "alert", "{err}" }
                }

                Field { label: "Email", name: "email", kind: "email", value: email, errors }
                Field { label: "Password", name: "password", kind: "password", value: password, errors }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign up" }
            }
        }
    }
}
