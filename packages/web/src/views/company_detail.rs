//! Single company page: details, booking, and admin edit/delete.

use api::scheduling::{confirm_company_deletion, BookingDraft};
use api::{Company, NewCompany};
use chrono::Utc;
use dioxus::prelude::*;
use ui::datetime::parse_datetime_input;
use ui::{use_api, use_auth, Loader};

use super::company_form::CompanyForm;
use crate::Route;

#[component]
pub fn CompanyDetail(id: String) -> Element {
    let api = use_api();
    let auth = use_auth();
    let nav = use_navigator();
    let mut company = use_signal(|| Option::<Company>::None);
    let mut booking_count = use_signal(|| 0usize);
    let mut loaded = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| false);
    let mut confirm_input = use_signal(String::new);
    let mut date_input = use_signal(String::new);
    let mut reload = use_signal(|| 0u32);

    let loader_api = api.clone();
    let _loader = use_resource(use_reactive((&id,), move |(id,)| {
        let _ = reload();
        let api = loader_api.clone();
        async move {
            loaded.set(false);
            match api.company(&id).await {
                Ok(found) => company.set(Some(found)),
                Err(e) => {
                    tracing::error!(company = %id, "Failed to fetch company: {}", e);
                    company.set(None);
                    error.set(Some(e.to_string()));
                }
            }
            if let Ok(list) = api.bookings().await {
                booking_count.set(list.len());
            }
            loaded.set(true);
        }
    }));

    if !loaded() {
        return rsx! { Loader {} };
    }
    let Some(current) = company() else {
        return rsx! {
            div { class: "alert", "{error().unwrap_or_default()}" }
            Link { to: Route::Companies {}, "Back to companies" }
        };
    };

    let is_admin = auth().is_admin();

    let book_api = api.clone();
    let book_target = current.clone();
    let handle_book = move |_| {
        let draft = BookingDraft {
            company: Some(book_target.clone()),
            date: parse_datetime_input(&date_input()),
        };
        let (company_id, request) = match draft.submit(booking_count(), is_admin, Utc::now()) {
            Ok(ready) => ready,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        let api = book_api.clone();
        spawn(async move {
            match api.create_booking(&company_id, &request).await {
                Ok(()) => {
                    nav.push(Route::Bookings {});
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let update_api = api.clone();
    let update_id = current.id.clone();
    let handle_update = move |body: NewCompany| {
        let api = update_api.clone();
        let id = update_id.clone();
        spawn(async move {
            match api.update_company(&id, &body).await {
                Ok(_) => {
                    editing.set(false);
                    *reload.write() += 1;
                }
                Err(e) => {
                    tracing::error!(company = %id, "Error updating company: {}", e);
                    error.set(Some("Failed to update company. Please try again.".into()));
                }
            }
        });
    };

    let delete_api = api.clone();
    let delete_target = current.clone();
    let handle_delete = move |_| {
        if let Err(e) = confirm_company_deletion(&delete_target, &confirm_input()) {
            error.set(Some(e.to_string()));
            return;
        }
        let api = delete_api.clone();
        let id = delete_target.id.clone();
        spawn(async move {
            match api.delete_company(&id).await {
                Ok(()) => {
                    nav.replace(Route::Companies {});
                }
                Err(e) => {
                    tracing::error!(company = %id, "Error deleting company: {}", e);
                    error.set(Some("Failed to delete company. Please try again.".into()));
                }
            }
        });
    };

    rsx! {
        Link { to: Route::Companies {}, "Back to companies" }

        if let Some(err) = error() {
            div {
                class: "alert",
                onclick: move |_| error.set(None),
                "{err}"
            }
        }

        if editing() {
            CompanyForm {
                initial: NewCompany::from(&current),
                submit_label: "Save",
                on_submit: handle_update,
                on_cancel: move |_| editing.set(false),
            }
        } else {
            div {
                class: "card",
                if !current.picture.is_empty() {
                    img { src: "{current.picture}", alt: "{current.name}" }
                }
                h1 { "{current.name}" }
                dl {
                    dt { "Business" }
                    dd { "{current.business}" }
                    dt { "Address" }
                    dd { "{current.address}, {current.province} {current.postalcode}" }
                    dt { "Telephone" }
                    dd { "{current.tel}" }
                }
            }
        }

        section {
            class: "card",
            h2 { "Book an interview" }
            input {
                r#type: "datetime-local",
                value: date_input(),
                oninput: move |evt| date_input.set(evt.value()),
            }
            button { class: "btn btn-primary", onclick: handle_book, "Book" }
        }

        if is_admin {
            section {
                class: "card",
                h2 { "Manage company" }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| editing.set(true),
                    "Edit"
                }
                p { "Type the company name to confirm deletion." }
                input {
                    value: confirm_input(),
                    placeholder: "{current.name}",
                    oninput: move |evt| confirm_input.set(evt.value()),
                }
                button { class: "btn btn-danger", onclick: handle_delete, "Delete" }
            }
        }
    }
}
