//! Sign-in and registration form rules.
//!
//! Each check returns the inline message the form shows next to the field,
//! so pages only decide where to render it.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::OnceLock;

use regex::Regex;

const MIN_NAME_LEN: usize = 2;
const MIN_LOGIN_PASSWORD_LEN: usize = 6;
const MIN_REGISTER_PASSWORD_LEN: usize = 8;
const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// Trimmed, validated sign-in form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Trimmed, validated registration form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// `local@domain.tld` with a letter-only TLD of two or more characters.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Failed to compile email regex")
    });
    regex.is_match(email)
}

fn check_email(email: &str) -> Result<(), &'static str> {
    if email.is_empty() {
        return Err("Email is required");
    }
    if !is_valid_email(email) {
        return Err("Invalid email address");
    }
    Ok(())
}

/// Registration password policy: length, one of each character class, and
/// nothing outside letters, digits and the allowed specials.
///
/// # Errors
///
/// Returns the message describing the first unmet rule.
pub fn check_new_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < MIN_REGISTER_PASSWORD_LEN {
        return Err("Password must be at least 8 characters");
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIALS.contains(c));
    let allowed = password.chars().all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c));
    if !(has_lower && has_upper && has_digit && has_special && allowed) {
        return Err(
            "Password must contain at least one uppercase letter, one lowercase letter, one number and one special character",
        );
    }
    Ok(())
}

/// Validate the sign-in form.
///
/// # Errors
///
/// Returns the message for the first invalid field.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginInput, &'static str> {
    let email = email.trim();
    check_email(email)?;
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < MIN_LOGIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(LoginInput { email: email.to_owned(), password: password.to_owned() })
}

/// Validate the registration form.
///
/// # Errors
///
/// Returns the message for the first invalid field.
pub fn validate_registration_input(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    accepted_terms: bool,
) -> Result<RegistrationInput, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required");
    }
    if name.chars().count() < MIN_NAME_LEN {
        return Err("Name must be at least 2 characters");
    }
    let email = email.trim();
    check_email(email)?;
    check_new_password(password)?;
    if confirm_password.is_empty() {
        return Err("Please confirm your password");
    }
    if confirm_password != password {
        return Err("Passwords do not match");
    }
    if !accepted_terms {
        return Err("You must accept the terms and conditions");
    }
    Ok(RegistrationInput { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}
