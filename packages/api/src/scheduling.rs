//! Booking rules checked before a request leaves the client.
//!
//! The backend enforces the same limits; checking here lets the pages hide
//! the booking button and explain why instead of surfacing a 400.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{Booking, BookingRequest, Company};

/// Interview slots a regular user may hold at once.
pub const MAX_BOOKINGS_PER_USER: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingRejection {
    #[error("Please select both a company and a date.")]
    Incomplete,

    #[error("You already have {} bookings.", MAX_BOOKINGS_PER_USER)]
    LimitReached,

    #[error("Please pick a date that has not passed.")]
    PastDate,

    #[error("Company name doesn't match. Deletion cancelled.")]
    ConfirmationMismatch,
}

pub fn remaining_slots(existing: usize) -> usize {
    MAX_BOOKINGS_PER_USER.saturating_sub(existing)
}

pub fn can_book(existing: usize) -> bool {
    remaining_slots(existing) > 0
}

/// Selection state of the booking dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    pub company: Option<Company>,
    pub date: Option<DateTime<Utc>>,
}

impl BookingDraft {
    /// Check the draft and produce the target company id plus request body.
    ///
    /// Administrators are not subject to the slot limit.
    pub fn submit(
        &self,
        existing: usize,
        is_admin: bool,
        now: DateTime<Utc>,
    ) -> Result<(String, BookingRequest), BookingRejection> {
        let (Some(company), Some(date)) = (&self.company, self.date) else {
            return Err(BookingRejection::Incomplete);
        };
        if !is_admin && !can_book(existing) {
            return Err(BookingRejection::LimitReached);
        }
        if date < now {
            return Err(BookingRejection::PastDate);
        }
        Ok((company.id.clone(), BookingRequest { booking_date: date }))
    }

    pub fn clear(&mut self) {
        self.company = None;
        self.date = None;
    }
}

/// Deleting a booking from the admin table requires typing its company name exactly.
pub fn confirm_deletion(booking: &Booking, typed: &str) -> Result<(), BookingRejection> {
    confirm_company_deletion(&booking.company, typed)
}

/// Deleting a company requires typing its name exactly.
pub fn confirm_company_deletion(company: &Company, typed: &str) -> Result<(), BookingRejection> {
    if typed == company.name {
        Ok(())
    } else {
        Err(BookingRejection::ConfirmationMismatch)
    }
}
