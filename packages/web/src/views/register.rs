//! Registration page view for job seekers.

use api::{RegisterForm, Role, ValidationErrors};
use dioxus::prelude::*;
use ui::{use_api, use_config, use_refresh_auth};

use super::field::Field;
use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let api = use_api();
    let config = use_config();
    let refresh = use_refresh_auth();
    let nav = use_navigator();
    let name = use_signal(String::new);
    let email = use_signal(String::new);
    let tel = use_signal(String::new);
    let mut role = use_signal(Role::default);
    let password = use_signal(String::new);
    let confirm_password = use_signal(String::new);
    let mut errors = use_signal(ValidationErrors::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let form = RegisterForm {
            name: name(),
            email: email(),
            tel: tel(),
            role: role(),
            password: password(),
            confirm_password: confirm_password(),
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
            match api.register(&request).await {
                Ok(_) => {
                    refresh.call(());
                    nav.push(home);
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Create Account" }
            p { "Sign up to browse companies and book interviews." }

            form {
                class: "form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "alert", "{err}" }
                }

                Field { label: "Name", name: "name", value: name, errors }
                Field { label: "Email", name: "email", kind: "email", value: email, errors }
                Field { label: "Telephone", name: "tel", kind: "tel", placeholder: "+66812345678", value: tel, errors }

                label { r#for: "role", "Role" }
                select {
                    id: "role",
                    value: if role() == Role::Admin { "admin" } else { "user" },
                    onchange: move |evt| {
                        role.set(if evt.value() == "admin" { Role::Admin } else { Role::User });
                    },
                    option { value: "user", "User" }
                    option { value: "admin", "Admin" }
                }

                Field { label: "Password", name: "password", kind: "password", value: password, errors }
                Field { label: "Confirm password", name: "confirm_password", kind: "password", value: confirm_password, errors }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
