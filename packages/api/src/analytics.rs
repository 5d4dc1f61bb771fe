//! Booking statistics for the admin dashboard.

use std::collections::BTreeMap;

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::models::Booking;

/// Default reporting window length, in days after the start date.
pub const DEFAULT_WINDOW_DAYS: u64 = 31;

/// Inclusive calendar-day range the dashboard reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub exclude_past: bool,
}

impl AnalyticsWindow {
    /// `today` through `today + 31 days`, past bookings included.
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            start: today,
            end: today
                .checked_add_days(Days::new(DEFAULT_WINDOW_DAYS))
                .unwrap_or(NaiveDate::MAX),
            exclude_past: false,
        }
    }

    pub fn contains(&self, booking: &Booking, now: DateTime<Utc>) -> bool {
        let day = booking.booking_date.date_naive();
        let in_range = self.start <= day && day <= self.end;
        in_range && !(self.exclude_past && booking.booking_date < now)
    }

    /// Every day of the window, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Count {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub upcoming: usize,
    pub past: usize,
    pub companies: usize,
}

pub fn summarize(bookings: &[Booking], company_count: usize, now: DateTime<Utc>) -> Summary {
    let past = bookings.iter().filter(|b| b.booking_date < now).count();
    Summary {
        total: bookings.len(),
        upcoming: bookings.len() - past,
        past,
        companies: company_count,
    }
}

fn ranked(counts: BTreeMap<String, usize>) -> Vec<Count> {
    let mut ranked: Vec<Count> = counts
        .into_iter()
        .map(|(label, count)| Count { label, count })
        .collect();
    // Stable sort keeps ties alphabetical.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Bookings per company name inside the window, busiest first.
pub fn by_company(bookings: &[Booking], window: &AnalyticsWindow, now: DateTime<Utc>) -> Vec<Count> {
    let mut counts = BTreeMap::new();
    for booking in bookings.iter().filter(|b| window.contains(b, now)) {
        *counts.entry(booking.company.name.clone()).or_insert(0) += 1;
    }
    ranked(counts)
}

/// Bookings per business category inside the window, busiest first.
pub fn by_business(bookings: &[Booking], window: &AnalyticsWindow, now: DateTime<Utc>) -> Vec<Count> {
    let mut counts = BTreeMap::new();
    for booking in bookings.iter().filter(|b| window.contains(b, now)) {
        let business = match booking.company.business.trim() {
            "" => "Other",
            b => b,
        };
        *counts.entry(business.to_string()).or_insert(0) += 1;
    }
    ranked(counts)
}

/// Zero-filled daily counts for every day of the window.
pub fn by_day(bookings: &[Booking], window: &AnalyticsWindow, now: DateTime<Utc>) -> Vec<(NaiveDate, usize)> {
    let mut counts: BTreeMap<NaiveDate, usize> = window.days().map(|d| (d, 0)).collect();
    for booking in bookings.iter().filter(|b| window.contains(b, now)) {
        if let Some(count) = counts.get_mut(&booking.booking_date.date_naive()) {
            *count += 1;
        }
    }
    counts.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::fixtures::{at, booking, company};

    const DAY: i64 = 86_400;
    // 2024-05-10T00:00:00Z
    const START: i64 = 1_715_299_200;

    fn window() -> AnalyticsWindow {
        AnalyticsWindow::starting(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap())
    }

    fn sample() -> Vec<Booking> {
        let acme = company("c1", "Acme", "Software");
        let globex = company("c2", "Globex", "Finance");
        let initech = company("c3", "Initech", "Software");
        vec![
            booking("b1", "u1", acme.clone(), START + 3600),
            booking("b2", "u2", acme.clone(), START + DAY),
            booking("b3", "u3", globex.clone(), START + DAY + 60),
            booking("b4", "u4", initech, START + 2 * DAY),
            booking("b5", "u5", globex, START - DAY),
            booking("b6", "u6", acme, START + 40 * DAY),
        ]
    }

    #[test]
    fn test_default_window() {
        let w = window();
        assert_eq!(w.end, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(w.days().count(), 32);
    }

    #[test]
    fn test_by_company_ranks_busiest_first() {
        let counts = by_company(&sample(), &window(), at(START));
        let pairs: Vec<_> = counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
        assert_eq!(pairs, [("Acme", 2), ("Globex", 1), ("Initech", 1)]);
    }

    #[test]
    fn test_exclude_past() {
        let mut w = window();
        w.exclude_past = true;
        let counts = by_company(&sample(), &w, at(START + DAY + 30));
        let pairs: Vec<_> = counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
        assert_eq!(pairs, [("Globex", 1), ("Initech", 1)]);
    }

    #[test]
    fn test_by_business() {
        let counts = by_business(&sample(), &window(), at(START));
        assert_eq!(counts[0].label, "Software");
        assert_eq!(counts[0].count, 3);
        assert_eq!(counts[1].label, "Finance");
    }

    #[test]
    fn test_by_day_is_zero_filled() {
        let days = by_day(&sample(), &window(), at(START));
        assert_eq!(days.len(), 32);
        assert_eq!(days[0].1, 1);
        assert_eq!(days[1].1, 2);
        assert_eq!(days[2].1, 1);
        assert!(days[3..].iter().all(|(_, c)| *c == 0));
    }

    #[test]
    fn test_summary() {
        let summary = summarize(&sample(), 3, at(START + DAY));
        assert_eq!(summary.total, 6);
        assert_eq!(summary.past, 2);
        assert_eq!(summary.upcoming, 4);
        assert_eq!(summary.companies, 3);
    }
}
