//! Request validation for user creation.
//!
//! Input arrives as untyped JSON; the output is either a [`NewUser`] ready
//! for the repository, or a [`FieldErrors`] value listing every violated
//! field with its messages.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::users::repo::UserType;

/// Field-level validation failures, keyed the way clients see them.
/// Serializes to the `fieldErrors` mapping; clean fields are omitted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub email: Vec<&'static str>,
    #[serde(rename = "type", skip_serializing_if = "Vec::is_empty")]
    pub user_type: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub password: Vec<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.user_type.is_empty()
            && self.password.is_empty()
    }
}

/// A creation request that passed every field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    pub password: String,
}

/// Validate an untyped request body as a new-user specification.
///
/// Every applicable check runs independently, so a body with several bad
/// fields reports all of them in one pass. Never panics, whatever the
/// input shape.
pub fn parse_new_user(input: &Value) -> Result<NewUser, FieldErrors> {
    lazy_static! {
        static ref DIGIT_RE: Regex = Regex::new(r"[0-9]").unwrap();
        static ref LOWER_RE: Regex = Regex::new(r"[a-z]").unwrap();
        static ref UPPER_RE: Regex = Regex::new(r"[A-Z]").unwrap();
    }

    let mut errors = FieldErrors::default();

    let name = input.get("name").and_then(Value::as_str);
    if name.is_none() {
        errors.name.push("Required");
    }

    let email = input.get("email").and_then(Value::as_str);
    if email.is_none() {
        errors.email.push("Required");
    }

    let user_type = input
        .get("type")
        .and_then(Value::as_str)
        .and_then(UserType::from_literal);
    if user_type.is_none() {
        errors.user_type.push("Invalid input");
    }

    let password = input.get("password").and_then(Value::as_str);
    match password {
        None => errors.password.push("Required"),
        Some(password) => {
            let len = password.chars().count();
            if len < 8 {
                errors.password.push("Must be 8 characters or more");
            }
            if len > 64 {
                errors.password.push("Must be 64 characters or less");
            }
            if !DIGIT_RE.is_match(password) {
                errors.password.push("Must contain at least one digit (0-9)");
            }
            if !LOWER_RE.is_match(password) {
                errors
                    .password
                    .push("Must contain at least one lowercase letter (a-z)");
            }
            if !UPPER_RE.is_match(password) {
                errors
                    .password
                    .push("Must contain at least one uppercase letter (A-Z)");
            }
        }
    }

    match (name, email, user_type, password) {
        (Some(name), Some(email), Some(user_type), Some(password)) if errors.is_empty() => {
            Ok(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                user_type,
                password: password.to_string(),
            })
        }
        _ => Err(errors),
    }
}
