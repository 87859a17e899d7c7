use bleiner_contact::{error_message_key, ContactForm, Field};

fn form(name: &str, email: &str, phone: &str, message: &str) -> ContactForm {
    ContactForm {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
        message: message.to_owned(),
    }
}

#[test]
fn valid_form_has_no_errors() {
    let valid = [
        form("Max Mustermann", "max@beispiel.at", "", "Hallo"),
        form("A", "a@b.com", "+43 664 1234567", "hi"),
        form("John", "john@example.co.uk", "0664 462 17 57", "project inquiry"),
        form("N", "n@d.io", "(01) 234-5678", "m"),
    ];

    for form in valid {
        assert!(form.field_errors().is_empty(), "unexpected errors for {form:?}");
    }
}

#[test]
fn blank_form_collects_all_required_errors() {
    let errors = ContactForm::default().field_errors();

    assert_eq!(errors.len(), 3);
    assert_eq!(errors.code(Field::Name), Some("nameRequired"));
    assert_eq!(errors.code(Field::Email), Some("emailRequired"));
    assert_eq!(errors.code(Field::Message), Some("messageRequired"));
    // Phone is optional, an empty value is fine.
    assert_eq!(errors.code(Field::Phone), None);
}

#[test]
fn whitespace_only_counts_as_blank() {
    let errors = form("  ", " \t ", "", " \n ").field_errors();

    assert_eq!(errors.code(Field::Name), Some("nameRequired"));
    assert_eq!(errors.code(Field::Email), Some("emailRequired"));
    assert_eq!(errors.code(Field::Message), Some("messageRequired"));
}

#[test]
fn malformed_email_is_the_only_error() {
    let errors = form("A", "bad", "", "hi").field_errors();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.code(Field::Email), Some("emailInvalid"));
}

#[test]
fn email_shape_edge_cases() {
    for bad in ["a@b", "a b@c.com", "a@b@c.com", "a@.com", "a@b.", "@b.com"] {
        let errors = form("A", bad, "", "hi").field_errors();
        assert_eq!(errors.code(Field::Email), Some("emailInvalid"), "{bad}");
    }

    for good in ["a@b.c", "first.last@sub.domain.at", "x+y@z.co"] {
        let errors = form("A", good, "", "hi").field_errors();
        assert_eq!(errors.code(Field::Email), None, "{good}");
    }
}

#[test]
fn malformed_phone_is_the_only_error() {
    let errors = form("A", "a@b.com", "abc", "hi").field_errors();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.code(Field::Phone), Some("phoneInvalid"));
}

#[test]
fn phone_shape_edge_cases() {
    // Too short, too long, illegal characters, misplaced plus.
    for bad in ["123456", "+123456789012345678901", "0664/4621757", "1234567+"] {
        let errors = form("A", "a@b.com", bad, "hi").field_errors();
        assert_eq!(errors.code(Field::Phone), Some("phoneInvalid"), "{bad}");
    }

    for good in ["1234567", "+43 (0) 664-123", "0664 462 17 57"] {
        let errors = form("A", "a@b.com", good, "hi").field_errors();
        assert_eq!(errors.code(Field::Phone), None, "{good}");
    }
}

#[test]
fn errors_are_rebuilt_each_pass() {
    let mut form = form("", "bad", "", "hi");
    let first = form.field_errors();
    assert_eq!(first.len(), 2);

    form.name = "A".to_owned();
    form.email = "a@b.com".to_owned();

    // No stale errors survive from the earlier pass.
    assert!(form.field_errors().is_empty());
}

#[test]
fn error_codes_map_to_bundle_keys() {
    assert_eq!(
        error_message_key("nameRequired"),
        "contact.form.errors.nameRequired"
    );
    assert_eq!(
        error_message_key("phoneInvalid"),
        "contact.form.errors.phoneInvalid"
    );
}
