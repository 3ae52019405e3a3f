use super::*;

#[test]
fn invalid_credentials_message_matches_login_form() {
    assert_eq!(AuthError::InvalidCredentials.user_message(), "Invalid email or password");
}

#[test]
fn registration_rejected_message_matches_register_form() {
    assert_eq!(
        AuthError::RegistrationRejected.user_message(),
        "Registration failed. Please try again."
    );
}

#[test]
fn unexpected_message_hides_details() {
    let err = AuthError::Unexpected("connection reset".to_owned());
    assert_eq!(err.user_message(), "An error occurred. Please try again.");
    assert!(err.to_string().contains("connection reset"));
}
