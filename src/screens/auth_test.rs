use super::*;

// =============================================================
// Email form validation
// =============================================================

#[test]
fn email_input_is_trimmed_into_the_method() {
    assert_eq!(
        validate_email_input("  jordan@x.com  ", " hunter2 "),
        Ok(AuthMethod::Email {
            email: "jordan@x.com".to_owned(),
            password: "hunter2".to_owned(),
        })
    );
}

#[test]
fn email_form_requires_both_fields() {
    let expected = Err("Please enter both email and password");
    assert_eq!(validate_email_input("", "hunter2"), expected);
    assert_eq!(validate_email_input("jordan@x.com", ""), expected);
    assert_eq!(validate_email_input("   ", "   "), expected);
}

// =============================================================
// Phone form validation
// =============================================================

#[test]
fn phone_input_is_trimmed_into_the_method() {
    assert_eq!(
        validate_phone_input(" +1 (555) 000-0000 "),
        Ok(AuthMethod::Phone {
            number: "+1 (555) 000-0000".to_owned(),
        })
    );
}

#[test]
fn phone_form_requires_a_number() {
    assert_eq!(
        validate_phone_input("   "),
        Err("Please enter your phone number")
    );
}
