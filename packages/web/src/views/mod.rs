mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod enroll;
pub use enroll::Enroll;

mod companies;
pub use companies::Companies;

mod company_detail;
pub use company_detail::CompanyDetail;

mod bookings;
pub use bookings::Bookings;

mod profile;
pub use profile::Profile;

mod admin;
pub use admin::Admin;

mod clear;
pub use clear::Clear;

mod not_found;
pub use not_found::NotFound;

mod company_form;
mod field;
