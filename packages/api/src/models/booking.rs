use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Company, User};

/// Booking owner: either a bare id or the populated user document,
/// depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Id(String),
    User(User),
}

impl UserRef {
    pub fn id(&self) -> &str {
        match self {
            UserRef::Id(id) => id,
            UserRef::User(user) => &user.id,
        }
    }

    /// Text matched by the booking search box.
    pub fn label(&self) -> &str {
        match self {
            UserRef::Id(id) => id,
            UserRef::User(user) => user.display_name(),
        }
    }
}

/// An interview slot booked with a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: UserRef,
    pub company: Company,
    #[serde(rename = "bookingDate")]
    pub booking_date: DateTime<Utc>,
}

/// Body for creating or rescheduling a booking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequest {
    #[serde(rename = "bookingDate")]
    pub booking_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_with_user_id() {
        let booking: Booking = serde_json::from_str(
            r#"{"_id":"b1","user":"u1","company":{"_id":"c1","name":"Acme"},"bookingDate":"2024-05-10T09:00:00.000Z"}"#,
        )
        .unwrap();

        assert_eq!(booking.user.id(), "u1");
        assert_eq!(booking.company.name, "Acme");
        assert_eq!(booking.booking_date.timestamp(), 1_715_331_600);
    }

    #[test]
    fn test_booking_with_populated_user() {
        let booking: Booking = serde_json::from_str(
            r#"{"_id":"b1","user":{"_id":"u1","name":"Jane","email":"j@x.co"},"company":{"_id":"c1"},"bookingDate":"2024-05-10T09:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(booking.user.id(), "u1");
        assert_eq!(booking.user.label(), "Jane");
    }

    #[test]
    fn test_request_uses_camel_case() {
        let request = BookingRequest {
            booking_date: DateTime::from_timestamp(1_715_331_600, 0).unwrap(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["bookingDate"], "2024-05-10T09:00:00Z");
    }
}
