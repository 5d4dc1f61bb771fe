//! # Form validation
//!
//! Each form struct holds raw input exactly as typed and converts into the
//! request body it backs via `validate()`. All failing fields are reported
//! at once, keyed by field name, so the page can render each message under
//! its input.
//!
//! | Form | Request | Endpoint |
//! |------|---------|----------|
//! | [`LoginForm`] | [`LoginRequest`] | `POST auth/login` |
//! | [`RegisterForm`] | [`RegisterRequest`] | `POST auth/register` |
//! | [`EnrollForm`] | [`RegisterRequest`] (role `admin`) | `POST auth/register` |
//! | [`NewCompany`] | itself | `POST/PUT companies` |

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::{LoginRequest, NewCompany, RegisterRequest, Role};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// E.164-style number: optional `+`, no leading zero, 2-15 digits.
static INTERNATIONAL_TEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("valid tel regex"));

/// North-American style number with optional country code and extension.
static NANP_TEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\+?(\d{1,3}))?[-. (]*(\d{3})[-. )]*(\d{3})[-. ]*(\d{4})(?: *x(\d+))?\s*$")
        .expect("valid tel regex")
});

const MIN_NAME_LEN: usize = 2;
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl std::error::Error for ValidationErrors {}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    fn check(&mut self, ok: bool, field: &'static str, message: &'static str) {
        if !ok {
            self.push(field, message);
        }
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

fn long_enough(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationErrors> {
        let email = self.email.trim();
        let mut errors = ValidationErrors::default();
        errors.check(is_email(email), "email", "Invalid email address");
        errors.check(!self.password.is_empty(), "password", "Password is required");
        errors.into_result(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub tel: String,
    pub role: Role,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, ValidationErrors> {
        let name = self.name.trim();
        let email = self.email.trim();
        let tel = self.tel.trim();

        let mut errors = ValidationErrors::default();
        errors.check(
            long_enough(name, MIN_NAME_LEN),
            "name",
            "Name must be at least 2 characters",
        );
        errors.check(is_email(email), "email", "Invalid email address");
        errors.check(INTERNATIONAL_TEL.is_match(tel), "tel", "Invalid phone number");
        check_passwords(&mut errors, &self.password, &self.confirm_password);

        errors.into_result(RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            tel: tel.to_string(),
            role: self.role,
            password: self.password.clone(),
            created_at: None,
        })
    }
}

/// Company administrator sign-up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollForm {
    pub name: String,
    pub email: String,
    pub tel: String,
    pub company_name: String,
    pub password: String,
    pub confirm_password: String,
}

impl EnrollForm {
    /// Validate and build the registration body: the person and company names
    /// are combined as `name@company`, the role is forced to admin and
    /// `createdAt` is stamped with `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<RegisterRequest, ValidationErrors> {
        let name = self.name.trim();
        let company = self.company_name.trim();
        let email = self.email.trim();

        let mut errors = ValidationErrors::default();
        errors.check(
            long_enough(name, MIN_NAME_LEN),
            "name",
            "Name must be at least 2 characters",
        );
        errors.check(is_email(email), "email", "Invalid email address");
        errors.check(NANP_TEL.is_match(&self.tel), "tel", "Invalid phone number");
        errors.check(
            long_enough(company, MIN_NAME_LEN),
            "company_name",
            "Company name must be at least 2 characters",
        );
        check_passwords(&mut errors, &self.password, &self.confirm_password);

        errors.into_result(RegisterRequest {
            name: format!("{name}@{company}"),
            email: email.to_string(),
            tel: self.tel.trim().to_string(),
            role: Role::Admin,
            password: self.password.clone(),
            created_at: Some(today.format("%Y-%m-%d").to_string()),
        })
    }
}

fn check_passwords(errors: &mut ValidationErrors, password: &str, confirm: &str) {
    errors.check(
        long_enough(password, MIN_PASSWORD_LEN),
        "password",
        "Password must be at least 6 characters",
    );
    errors.check(password == confirm, "confirm_password", "Passwords don't match");
}

impl NewCompany {
    pub fn validate(&self) -> Result<NewCompany, ValidationErrors> {
        let trimmed = NewCompany {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            business: self.business.trim().to_string(),
            province: self.province.trim().to_string(),
            postalcode: self.postalcode.trim().to_string(),
            tel: self.tel.trim().to_string(),
            picture: self.picture.trim().to_string(),
        };

        let mut errors = ValidationErrors::default();
        for (field, value) in [
            ("name", &trimmed.name),
            ("address", &trimmed.address),
            ("business", &trimmed.business),
            ("province", &trimmed.province),
            ("postalcode", &trimmed.postalcode),
            ("tel", &trimmed.tel),
            ("picture", &trimmed.picture),
        ] {
            errors.check(!value.is_empty(), field, "Please fill in all fields.");
        }
        errors.into_result(trimmed)
    }
}
