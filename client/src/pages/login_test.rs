use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  john.doe@example.com ", "password123"),
        Ok(("john.doe@example.com".to_owned(), "password123".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "pw"), Err("Please fill in all fields."));
    assert_eq!(validate_login_input("u@example.com", "   "), Err("Please fill in all fields."));
}

#[test]
fn validate_register_input_trims_names_and_username() {
    let input = validate_register_input(" John ", " Doe ", " john.doe@example.com ", "pw").unwrap();
    assert_eq!(
        input,
        RegisterInput {
            first_name: "John".to_owned(),
            last_name: "Doe".to_owned(),
            username: "john.doe@example.com".to_owned(),
            password: "pw".to_owned(),
        }
    );
}

#[test]
fn validate_register_input_rejects_any_blank_field() {
    assert_eq!(validate_register_input("", "Doe", "a@b.c", "pw"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_register_input("John", " ", "a@b.c", "pw"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_register_input("John", "Doe", "", "pw"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_register_input("John", "Doe", "a@b.c", ""), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn defaults_open_login_tab_without_feedback() {
    assert_eq!(AuthTab::default(), AuthTab::Login);
    assert_eq!(FormFeedback::default(), FormFeedback::None);
}
