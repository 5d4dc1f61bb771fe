//! Administrator dashboard: booking analytics and booking management.

use api::analytics::{by_business, by_company, by_day, summarize, AnalyticsWindow, Count};
use api::listing::{is_past, BookingFilter, BookingSort};
use api::scheduling::confirm_deletion;
use api::{Booking, Company};
use chrono::{Local, NaiveDate, Utc};
use dioxus::prelude::*;
use ui::datetime::format_datetime;
use ui::{use_api, use_auth, Loader};

#[component]
pub fn Admin() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut companies = use_signal(Vec::<Company>::new);
    let mut bookings = use_signal(Vec::<Booking>::new);
    let mut loaded = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut window = use_signal(|| AnalyticsWindow::starting(Local::now().date_naive()));
    let mut filter = use_signal(BookingFilter::default);
    let mut pending_delete = use_signal(|| Option::<Booking>::None);
    let mut confirm_input = use_signal(String::new);

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        async move {
            match api.companies().await {
                Ok(list) => companies.set(list),
                Err(e) => {
                    tracing::error!("Error fetching companies: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            match api.bookings().await {
                Ok(list) => bookings.set(list),
                Err(e) => {
                    tracing::error!("Error fetching bookings: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            loaded.set(true);
        }
    });

    let delete_api = api.clone();
    let handle_delete = move |_| {
        let Some(target) = pending_delete() else {
            return;
        };
        if let Err(e) = confirm_deletion(&target, &confirm_input()) {
            error.set(Some(e.to_string()));
            return;
        }
        let api = delete_api.clone();
        spawn(async move {
            match api.delete_booking(&target.id).await {
                Ok(()) => {
                    bookings.with_mut(|list| list.retain(|b| b.id != target.id));
                    pending_delete.set(None);
                    confirm_input.set(String::new());
                }
                Err(e) => {
                    tracing::error!(booking = %target.id, "Error deleting booking: {}", e);
                    error.set(Some("Failed to delete booking. Please try again.".into()));
                }
            }
        });
    };

    let state = auth();
    if state.loading || !loaded() {
        return rsx! { Loader { message: "Loading dashboard..." } };
    }
    if !state.is_admin() {
        return rsx! { div { class: "alert", "Access denied: administrators only." } };
    }

    let now = Utc::now();
    let current_window = window();
    let summary = summarize(&bookings.read(), companies.read().len(), now);
    let per_company = by_company(&bookings.read(), &current_window, now);
    let per_business = by_business(&bookings.read(), &current_window, now);
    let per_day: Vec<(NaiveDate, usize)> = by_day(&bookings.read(), &current_window, now)
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect();
    let table = filter.read().apply(&bookings.read(), now);

    rsx! {
        h1 { "Admin Dashboard" }

        if let Some(err) = error() {
            div {
                class: "alert",
                onclick: move |_| error.set(None),
                "{err}"
            }
        }

        section {
            class: "grid",
            div { class: "card", h2 { "{summary.total}" } p { "Total bookings" } }
            div { class: "card", h2 { "{summary.upcoming}" } p { "Upcoming" } }
            div { class: "card", h2 { "{summary.past}" } p { "Past" } }
            div { class: "card", h2 { "{summary.companies}" } p { "Companies" } }
        }

        section {
            h2 { "Analytics" }
            div {
                class: "toolbar",
                label { "From" }
                input {
                    r#type: "date",
                    value: "{current_window.start}",
                    onchange: move |evt| {
                        if let Ok(start) = evt.value().parse::<NaiveDate>() {
                            window.with_mut(|w| w.start = start);
                        }
                    },
                }
                label { "To" }
                input {
                    r#type: "date",
                    value: "{current_window.end}",
                    onchange: move |evt| {
                        if let Ok(end) = evt.value().parse::<NaiveDate>() {
                            window.with_mut(|w| w.end = end);
                        }
                    },
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: current_window.exclude_past,
                        onchange: move |evt| window.with_mut(|w| w.exclude_past = evt.checked()),
                    }
                    "Exclude past bookings"
                }
            }
            div {
                class: "grid",
                CountTable { title: "Bookings by company", counts: per_company }
                CountTable { title: "Bookings by business", counts: per_business }
                div {
                    class: "card",
                    h3 { "Bookings by day" }
                    if per_day.is_empty() {
                        p { "No bookings in this range." }
                    }
                    table {
                        tbody {
                            for (day, count) in per_day {
                                tr {
                                    key: "{day}",
                                    td { "{day}" }
                                    td { "{count}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        section {
            h2 { "Bookings" }
            div {
                class: "toolbar",
                input {
                    placeholder: "Search by user or company...",
                    value: filter.read().search.clone(),
                    oninput: move |evt| filter.with_mut(|f| f.search = evt.value()),
                }
                select {
                    onchange: move |evt| {
                        let sort = if evt.value() == "company" { BookingSort::CompanyName } else { BookingSort::Date };
                        filter.with_mut(|f| f.sort = sort);
                    },
                    option { value: "date", "Sort by date" }
                    option { value: "company", "Sort by company" }
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: filter.read().hide_past,
                        onchange: move |evt| filter.with_mut(|f| f.hide_past = evt.checked()),
                    }
                    "Hide past bookings"
                }
            }

            if let Some(target) = pending_delete() {
                div {
                    class: "card",
                    p { "Type \"{target.company.name}\" to delete this booking." }
                    input {
                        value: confirm_input(),
                        oninput: move |evt| confirm_input.set(evt.value()),
                    }
                    div {
                        class: "form-actions",
                        button { class: "btn btn-danger", onclick: handle_delete, "Delete" }
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| {
                                pending_delete.set(None);
                                confirm_input.set(String::new());
                            },
                            "Cancel"
                        }
                    }
                }
            }

            table {
                thead {
                    tr {
                        th { "User" }
                        th { "Company" }
                        th { "Date" }
                        th { "Status" }
                        th {}
                    }
                }
                tbody {
                    {table.into_iter().map(|booking| {
                        let past = is_past(&booking, now);
                        let target = booking.clone();
                        rsx! {
                            tr {
                                key: "{booking.id}",
                                td { "{booking.user.label()}" }
                                td { "{booking.company.name}" }
                                td { "{format_datetime(booking.booking_date)}" }
                                td { span { class: "badge", if past { "Past" } else { "Scheduled" } } }
                                td {
                                    button {
                                        class: "btn btn-danger",
                                        onclick: move |_| pending_delete.set(Some(target.clone())),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    })}
                }
            }
        }
    }
}

#[component]
fn CountTable(title: String, counts: Vec<Count>) -> Element {
    rsx! {
        div {
            class: "card",
            h3 { "{title}" }
            if counts.is_empty() {
                p { "No bookings in this range." }
            }
            table {
                tbody {
                    for entry in counts {
                        tr {
                            key: "{entry.label}",
                            td { "{entry.label}" }
                            td { "{entry.count}" }
                        }
                    }
                }
            }
        }
    }
}
