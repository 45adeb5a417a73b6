use super::*;

#[test]
fn all_fields_are_required() {
    assert_eq!(validate("", "secret1", "secret1"), Err("Please fill in all fields."));
    assert_eq!(validate("old", "", ""), Err("Please fill in all fields."));
}

#[test]
fn new_password_must_meet_minimum_length() {
    assert_eq!(
        validate("old", "short", "short"),
        Err("New password must be at least 6 characters long.")
    );
}

#[test]
fn new_passwords_must_match() {
    assert_eq!(
        validate("old", "secret1", "secret2"),
        Err("New passwords do not match.")
    );
}

#[test]
fn new_password_must_differ_from_current() {
    assert_eq!(
        validate("secret1", "secret1", "secret1"),
        Err("New password must be different from current password.")
    );
}

#[test]
fn valid_input_passes() {
    assert_eq!(validate("old-secret", "new-secret", "new-secret"), Ok(()));
}
