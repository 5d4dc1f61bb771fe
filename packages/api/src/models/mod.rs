//! Wire models for the job-fair backend.

mod booking;
mod company;
mod user;

pub use booking::{Booking, BookingRequest, UserRef};
pub use company::{Company, NewCompany};
pub use user::{AuthSession, LoginRequest, RegisterRequest, Role, User};
