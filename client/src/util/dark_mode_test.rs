use super::*;

#[test]
fn stored_values_round_trip() {
    assert_eq!(parse_stored(stored_value(true)), Some(true));
    assert_eq!(parse_stored(stored_value(false)), Some(false));
}

#[test]
fn unknown_stored_value_is_ignored() {
    assert_eq!(parse_stored(""), None);
    assert_eq!(parse_stored("dark"), None);
}

#[test]
fn storage_key_is_app_scoped() {
    assert!(STORAGE_KEY.starts_with("learnsync"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn toggle_flips_preference_outside_browser() {
    assert!(toggle(false));
    assert!(!toggle(true));
    assert!(!read_preference());
}
