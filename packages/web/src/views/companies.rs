//! Company list with business filter, name sort and booking dialog.

use api::listing::{business_options, filter_companies, SortOrder};
use api::scheduling::{remaining_slots, BookingDraft};
use api::{Booking, Company, NewCompany};
use chrono::Utc;
use dioxus::prelude::*;
use ui::datetime::parse_datetime_input;
use ui::{use_api, use_auth, Loader};

use super::company_form::CompanyForm;
use crate::Route;

#[component]
pub fn Companies() -> Element {
    let api = use_api();
    let auth = use_auth();
    let nav = use_navigator();
    let mut companies = use_signal(Vec::<Company>::new);
    let mut bookings = use_signal(Vec::<Booking>::new);
    let mut loaded = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut business = use_signal(String::new);
    let mut order = use_signal(SortOrder::default);
    let mut draft = use_signal(BookingDraft::default);
    let mut date_input = use_signal(String::new);
    let mut show_create = use_signal(|| false);
    let mut reload = use_signal(|| 0u32);

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let _ = reload();
        let api = loader_api.clone();
        async move {
            match api.companies().await {
                Ok(list) => companies.set(list),
                Err(e) => {
                    tracing::error!("Failed to fetch companies: {}", e);
                    error.set(Some("Failed to fetch companies. Please try again.".into()));
                }
            }
            match api.bookings().await {
                Ok(list) => bookings.set(list),
                Err(e) => tracing::warn!("Failed to fetch bookings: {}", e),
            }
            loaded.set(true);
        }
    });

    let is_admin = auth().is_admin();
    let slots = remaining_slots(bookings.read().len());
    let visible = filter_companies(&companies.read(), &business(), order());
    let options = business_options(&companies.read());

    let book_api = api.clone();
    let handle_book = move |_| {
        let mut selection = draft();
        selection.date = parse_datetime_input(&date_input());
        let (company_id, request) =
            match selection.submit(bookings.read().len(), is_admin, Utc::now()) {
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
                    draft.set(BookingDraft::default());
                    date_input.set(String::new());
                    nav.push(Route::Bookings {});
                }
                Err(e) => {
                    tracing::error!("Error creating booking: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let create_api = api.clone();
    let handle_create = move |company: NewCompany| {
        let api = create_api.clone();
        spawn(async move {
            match api.create_company(&company).await {
                Ok(created) => {
                    tracing::info!(company = %created.id, "Created company");
                    show_create.set(false);
                    *reload.write() += 1;
                }
                Err(e) => {
                    tracing::error!("Error creating new company: {}", e);
                    error.set(Some("Failed to create company. Please try again.".into()));
                }
            }
        });
    };

    if !loaded() {
        return rsx! { Loader { message: "Loading companies..." } };
    }

    rsx! {
        header {
            h1 { "Company Information" }
            p { "Discover the companies and their information." }
            if is_admin {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_create.set(true),
                    "Create Company"
                }
            } else {
                p { "You can book {slots} more interview(s)." }
            }
        }

        if let Some(err) = error() {
            div {
                class: "alert",
                onclick: move |_| error.set(None),
                "{err}"
            }
        }

        if show_create() {
            CompanyForm {
                initial: NewCompany::default(),
                submit_label: "Create",
                on_submit: handle_create,
                on_cancel: move |_| show_create.set(false),
            }
        }

        div {
            class: "toolbar",
            select {
                value: business(),
                onchange: move |evt| business.set(evt.value()),
                option { value: "", "All businesses" }
                for option_name in options {
                    option { key: "{option_name}", value: "{option_name}", "{option_name}" }
                }
            }
            button {
                class: "btn btn-ghost",
                onclick: move |_| order.set(order().toggled()),
                "Sort {order().label()}"
            }
        }

        if let Some(company) = draft().company {
            div {
                class: "card booking-dialog",
                h2 { "Book an interview with {company.name}" }
                input {
                    r#type: "datetime-local",
                    value: date_input(),
                    oninput: move |evt| date_input.set(evt.value()),
                }
                div {
                    class: "form-actions",
                    button { class: "btn btn-primary", onclick: handle_book, "Confirm booking" }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| draft.with_mut(BookingDraft::clear),
                        "Cancel"
                    }
                }
            }
        }

        div {
            class: "grid",
            {visible.into_iter().map(|company| {
                let selected = company.clone();
                rsx! {
                    div {
                        key: "{company.id}",
                        class: "card",
                        if !company.picture.is_empty() {
                            img { src: "{company.picture}", alt: "{company.name}" }
                        }
                        h2 { "{company.name}" }
                        p { "{company.business}" }
                        p { "{company.province}" }
                        div {
                            class: "form-actions",
                            Link {
                                to: Route::CompanyDetail { id: company.id.clone() },
                                class: "btn btn-ghost",
                                "Details"
                            }
                            if is_admin || slots > 0 {
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| {
                                        draft.set(BookingDraft { company: Some(selected.clone()), date: None });
                                    },
                                    "Book"
                                }
                            }
                        }
                    }
                }
            })}
        }
    }
}
