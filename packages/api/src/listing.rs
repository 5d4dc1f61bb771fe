//! Client-side filtering and ordering for the company and booking lists.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::models::{Booking, Company};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "A-Z",
            SortOrder::Descending => "Z-A",
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Companies whose business contains `business` (case-insensitive), sorted by name.
pub fn filter_companies(companies: &[Company], business: &str, order: SortOrder) -> Vec<Company> {
    let mut filtered: Vec<Company> = companies
        .iter()
        .filter(|c| contains_ignore_case(&c.business, business))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| {
        let ord = compare_names(&a.name, &b.name);
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
    filtered
}

/// Distinct non-empty business categories, alphabetical.
pub fn business_options(companies: &[Company]) -> Vec<String> {
    companies
        .iter()
        .map(|c| c.business.trim())
        .filter(|b| !b.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingSort {
    /// Newest first.
    #[default]
    Date,
    CompanyName,
}

/// Admin booking table controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFilter {
    pub hide_past: bool,
    pub search: String,
    pub sort: BookingSort,
}

impl BookingFilter {
    pub fn apply(&self, bookings: &[Booking], now: DateTime<Utc>) -> Vec<Booking> {
        let search = self.search.trim();
        let mut filtered: Vec<Booking> = bookings
            .iter()
            .filter(|b| !self.hide_past || !is_past(b, now))
            .filter(|b| {
                search.is_empty()
                    || contains_ignore_case(b.user.label(), search)
                    || contains_ignore_case(&b.company.name, search)
            })
            .cloned()
            .collect();

        match self.sort {
            BookingSort::Date => filtered.sort_by(|a, b| b.booking_date.cmp(&a.booking_date)),
            BookingSort::CompanyName => {
                filtered.sort_by(|a, b| compare_names(&a.company.name, &b.company.name))
            }
        }
        filtered
    }
}

pub fn is_past(booking: &Booking, now: DateTime<Utc>) -> bool {
    booking.booking_date < now
}
