//! Company administrator enrollment.

use api::{EnrollForm, ValidationErrors};
use chrono::Local;
use dioxus::prelude::*;
use ui::{use_api, use_config, use_refresh_auth};

use super::field::Field;
use crate::Route;

#[component]
pub fn Enroll() -> Element {
    let api = use_api();
    let config = use_config();
    let refresh = use_refresh_auth();
    let nav = use_navigator();
    let name = use_signal(String::new);
    let email = use_signal(String::new);
    let tel = use_signal(String::new);
    let company_name = use_signal(String::new);
    let password = use_signal(String::new);
    let confirm_password = use_signal(String::new);
    let mut errors = use_signal(ValidationErrors::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_enroll = move |evt: FormEvent| {
        evt.prevent_default();
        let form = EnrollForm {
            name: name(),
            email: email(),
            tel: tel(),
            company_name: company_name(),
            password: password(),
            confirm_password: confirm_password(),
        };
        let request = match form.validate(Local::now().date_naive()) {
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
                    tracing::info!(company = %company_name(), "Enrolled company administrator");
                    refresh.call(());
                    nav.push(home);
                }
                Err(e) => {
                    tracing::warn!("Enrollment failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Enroll your company" }
            p { "Create an administrator account to manage your company at the fair." }

            form {
                class: "form",
                onsubmit: handle_enroll,

                if let Some(err) = error() {
                    div { class: "alert", "{err}" }
                }

                Field { label: "Your name", name: "name", value: name, errors }
                Field { label: "Company name", name: "company_name", value: company_name, errors }
                Field { label: "Email", name: "email", kind: "email", value: email, errors }
                Field { label: "Telephone", name: "tel", kind: "tel", placeholder: "(555) 123-4567", value: tel, errors }
                Field { label: "Password", name: "password", kind: "password", value: password, errors }
                Field { label: "Confirm password", name: "confirm_password", kind: "password", value: confirm_password, errors }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Enrolling..." } else { "Enroll" }
                }
            }

            p {
                "Looking for a job instead? "
                Link { to: Route::Register {}, "Register as a job seeker" }
            }
        }
    }
}
