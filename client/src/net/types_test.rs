use super::*;

#[test]
fn user_deserializes_host_payload() {
    let json = r#"{
        "id": "6f1c1a3e-0000-4000-8000-000000000001",
        "name": "Ada Lovelace",
        "email": "ada@x.com",
        "created_at": 1700000000000
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.email, "ada@x.com");
    assert_eq!(user.created_at, 1_700_000_000_000);
}

#[test]
fn user_missing_email_is_rejected() {
    let json = r#"{ "id": "u1", "name": "Ada", "created_at": 0 }"#;
    assert!(serde_json::from_str::<User>(json).is_err());
}

#[test]
fn sign_in_request_serializes_credentials() {
    let body = SignInRequest { email: "user@example.com", password: "correct" };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "email": "user@example.com", "password": "correct" })
    );
}

#[test]
fn sign_up_request_serializes_all_fields() {
    let body = SignUpRequest { name: "Ada", email: "ada@x.com", password: "Secret1!" };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "name": "Ada", "email": "ada@x.com", "password": "Secret1!" })
    );
}
