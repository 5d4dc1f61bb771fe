//! Account details and a searchable list of the user's bookings.

use api::listing::{BookingFilter, BookingSort};
use api::Booking;
use chrono::Utc;
use dioxus::prelude::*;
use ui::datetime::format_datetime;
use ui::{use_api, use_auth, Loader, LogoutButton};

#[component]
pub fn Profile() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut bookings = use_signal(Vec::<Booking>::new);
    let mut filter = use_signal(BookingFilter::default);

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            match api.bookings().await {
                Ok(list) => bookings.set(list),
                Err(e) => tracing::warn!("Failed to fetch bookings: {}", e),
            }
        }
    });

    let state = auth();
    let Some(user) = state.user else {
        if state.loading {
            return rsx! { Loader { message: "Loading profile..." } };
        }
        return rsx! { div { class: "alert", "Failed to load user profile." } };
    };

    let visible = filter.read().apply(&bookings.read(), Utc::now());
    let role = if user.is_admin() { "Administrator" } else { "Job seeker" };

    rsx! {
        section {
            class: "card",
            h1 { "{user.display_name()}" }
            if let Some(company) = user.company_name() {
                p { "{company}" }
            }
            dl {
                dt { "Email" }
                dd { "{user.email}" }
                dt { "Telephone" }
                dd { "{user.tel}" }
                dt { "Role" }
                dd { "{role}" }
                if let Some(created) = user.created_at.as_deref() {
                    dt { "Member since" }
                    dd { "{created}" }
                }
            }
            LogoutButton { label: "Log out", class: "btn btn-ghost" }
        }

        section {
            h2 { "Bookings" }
            div {
                class: "toolbar",
                input {
                    placeholder: "Search bookings...",
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
            }
            table {
                thead {
                    tr {
                        th { "Company" }
                        th { "Date" }
                    }
                }
                tbody {
                    for booking in visible {
                        tr {
                            key: "{booking.id}",
                            td { "{booking.company.name}" }
                            td { "{format_datetime(booking.booking_date)}" }
                        }
                    }
                }
            }
        }
    }
}
