//! The signed-in user's interview bookings.

use api::scheduling::remaining_slots;
use api::{Booking, BookingRequest};
use chrono::Utc;
use dioxus::prelude::*;
use ui::datetime::{format_datetime, format_datetime_input, parse_datetime_input};
use ui::{use_api, use_is_admin, Loader};

use crate::Route;

#[component]
pub fn Bookings() -> Element {
    let api = use_api();
    let is_admin = use_is_admin();
    let mut bookings = use_signal(Vec::<Booking>::new);
    let mut loaded = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| Option::<String>::None);
    let mut date_input = use_signal(String::new);
    let mut reload = use_signal(|| 0u32);

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let _ = reload();
        let api = loader_api.clone();
        async move {
            match api.bookings().await {
                Ok(mut list) => {
                    list.sort_by_key(|b| b.booking_date);
                    bookings.set(list);
                }
                Err(e) => {
                    tracing::error!("Error fetching bookings: {}", e);
                    error.set(Some("Failed to fetch bookings. Please try again.".into()));
                }
            }
            loaded.set(true);
        }
    });

    let update_api = api.clone();
    let handle_update = use_callback(move |id: String| {
        let Some(date) = parse_datetime_input(&date_input()) else {
            error.set(Some("Please select a new date.".into()));
            return;
        };
        if date < Utc::now() {
            error.set(Some("Please pick a date that has not passed.".into()));
            return;
        }
        let api = update_api.clone();
        spawn(async move {
            match api.update_booking(&id, &BookingRequest { booking_date: date }).await {
                Ok(()) => {
                    editing.set(None);
                    *reload.write() += 1;
                }
                Err(e) => {
                    tracing::error!(booking = %id, "Error updating booking: {}", e);
                    error.set(Some("Failed to update booking. Please try again.".into()));
                }
            }
        });
    });

    let delete_api = api.clone();
    let handle_delete = use_callback(move |id: String| {
        let api = delete_api.clone();
        spawn(async move {
            match api.delete_booking(&id).await {
                Ok(()) => bookings.with_mut(|list| list.retain(|b| b.id != id)),
                Err(e) => {
                    tracing::error!(booking = %id, "Error deleting booking: {}", e);
                    error.set(Some("Failed to delete booking. Please try again.".into()));
                }
            }
        });
    });

    if !loaded() {
        return rsx! { Loader { message: "Loading bookings..." } };
    }

    let slots = remaining_slots(bookings.read().len());
    let now = Utc::now();

    rsx! {
        header {
            h1 { "My Bookings" }
            if !is_admin {
                p { "You can book {slots} more interview(s)." }
            }
            if is_admin || slots > 0 {
                Link { to: Route::Companies {}, class: "btn btn-primary", "Book an interview" }
            }
        }

        if let Some(err) = error() {
            div {
                class: "alert",
                onclick: move |_| error.set(None),
                "{err}"
            }
        }

        if bookings.read().is_empty() {
            p { "You have no bookings yet." }
        }

        div {
            class: "grid",
            {bookings().into_iter().map(|booking| {
                let edit_id = booking.id.clone();
                let save_id = booking.id.clone();
                let delete_id = booking.id.clone();
                let current_input = format_datetime_input(booking.booking_date);
                let past = booking.booking_date < now;
                rsx! {
                    div {
                        key: "{booking.id}",
                        class: "card",
                        h2 { "{booking.company.name}" }
                        p { "{format_datetime(booking.booking_date)}" }
                        span { class: "badge", if past { "Past" } else { "Scheduled" } }

                        if editing().as_deref() == Some(booking.id.as_str()) {
                            input {
                                r#type: "datetime-local",
                                value: date_input(),
                                oninput: move |evt| date_input.set(evt.value()),
                            }
                            div {
                                class: "form-actions",
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| handle_update.call(save_id.clone()),
                                    "Save"
                                }
                                button {
                                    class: "btn btn-ghost",
                                    onclick: move |_| editing.set(None),
                                    "Cancel"
                                }
                            }
                        } else {
                            div {
                                class: "form-actions",
                                button {
                                    class: "btn btn-ghost",
                                    onclick: move |_| {
                                        date_input.set(current_input.clone());
                                        editing.set(Some(edit_id.clone()));
                                    },
                                    "Reschedule"
                                }
                                button {
                                    class: "btn btn-danger",
                                    onclick: move |_| handle_delete.call(delete_id.clone()),
                                    "Cancel booking"
                                }
                            }
                        }
                    }
                }
            })}
        }
    }
}
