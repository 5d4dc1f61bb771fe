//! # API crate — backend access and client-side business rules
//!
//! Everything the pages need besides rendering: the REST client, the wire
//! models, form validation and the list/booking/analytics rules applied to
//! fetched data before it is shown.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `reqwest` client for `auth/*`, `companies` and `bookings` |
//! | [`models`] | `User`, `Company`, `Booking` and request bodies |
//! | [`validation`] | Login, register, enroll and company form checks |
//! | [`listing`] | Company filter/sort, admin booking filter/sort |
//! | [`scheduling`] | Booking slot limit, draft submission, delete confirmation |
//! | [`analytics`] | Dashboard counts per company, business and day |

pub mod analytics;
pub mod client;
mod error;
pub mod listing;
pub mod models;
pub mod scheduling;
pub mod validation;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{AuthSession, Booking, BookingRequest, Company, NewCompany, Role, User, UserRef};
pub use validation::{EnrollForm, FieldError, LoginForm, RegisterForm, ValidationErrors};

pub use store::JobfairConfig;
