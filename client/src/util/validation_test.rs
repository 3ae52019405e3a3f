use super::*;

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn accepts_common_addresses() {
    for email in ["user@example.com", "Ada.Lovelace+ml@uni.ac.uk", "x_y-z%1@sub-domain.io"] {
        assert!(is_valid_email(email), "{email}");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for email in ["", "user", "@example.com", "user@", "user@example", "user@example.c", "user@exa mple.com", "user@example.c0m"] {
        assert!(!is_valid_email(email), "{email}");
    }
}

#[test]
fn rejects_addresses_with_extra_parts() {
    for email in ["a@b@example.com", " user@example.com", "user@example.com ", "user@example.com\nx"] {
        assert!(!is_valid_email(email), "{email:?}");
    }
}

// =============================================================
// validate_login_input
// =============================================================

#[test]
fn login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  user@example.com ", " secret "),
        Ok(LoginInput { email: "user@example.com".to_owned(), password: " secret ".to_owned() })
    );
}

#[test]
fn login_input_requires_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Email is required"));
    assert_eq!(validate_login_input("user@example.com", ""), Err("Password is required"));
}

#[test]
fn login_input_rejects_bad_email_and_short_password() {
    assert_eq!(validate_login_input("nope", "secret"), Err("Invalid email address"));
    assert_eq!(
        validate_login_input("user@example.com", "12345"),
        Err("Password must be at least 6 characters")
    );
}

// =============================================================
// check_new_password
// =============================================================

#[test]
fn new_password_accepts_policy_compliant_value() {
    assert_eq!(check_new_password("Analytical1!"), Ok(()));
}

#[test]
fn new_password_rejects_short_value() {
    assert_eq!(check_new_password("Ab1!"), Err("Password must be at least 8 characters"));
}

#[test]
fn new_password_requires_every_character_class() {
    for password in ["analytical1!", "ANALYTICAL1!", "Analytical!!", "Analytical11"] {
        assert!(check_new_password(password).is_err(), "{password}");
    }
}

#[test]
fn new_password_rejects_disallowed_characters() {
    assert!(check_new_password("Analytical1! ").is_err());
    assert!(check_new_password("Analytical1#").is_err());
}

// =============================================================
// validate_registration_input
// =============================================================

#[test]
fn registration_input_happy_path() {
    assert_eq!(
        validate_registration_input(" Ada Lovelace ", "ada@x.com", "Analytical1!", "Analytical1!", true),
        Ok(RegistrationInput {
            name: "Ada Lovelace".to_owned(),
            email: "ada@x.com".to_owned(),
            password: "Analytical1!".to_owned(),
        })
    );
}

#[test]
fn registration_input_name_rules() {
    assert_eq!(
        validate_registration_input("", "ada@x.com", "Analytical1!", "Analytical1!", true),
        Err("Name is required")
    );
    assert_eq!(
        validate_registration_input(" A ", "ada@x.com", "Analytical1!", "Analytical1!", true),
        Err("Name must be at least 2 characters")
    );
}

#[test]
fn registration_input_confirmation_must_match() {
    assert_eq!(
        validate_registration_input("Ada", "ada@x.com", "Analytical1!", "", true),
        Err("Please confirm your password")
    );
    assert_eq!(
        validate_registration_input("Ada", "ada@x.com", "Analytical1!", "Analytical2!", true),
        Err("Passwords do not match")
    );
}

#[test]
fn registration_input_requires_terms() {
    assert_eq!(
        validate_registration_input("Ada", "ada@x.com", "Analytical1!", "Analytical1!", false),
        Err("You must accept the terms and conditions")
    );
}
