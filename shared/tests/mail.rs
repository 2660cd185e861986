use shared::{MailDraft, MailSettings};

#[test]
fn composes_mailto() {
    let draft = MailDraft::new("Ann", "a@x.com", "Hi");

    assert_eq!(
        draft.mailto(&MailSettings::default()),
        "mailto:jvravichandra03@gmail.com?subject=Portfolio%20message%20from%20Ann&body=From%3A%20Ann%20%3Ca%40x.com%3E%0A%0AHi"
    );
}

#[test]
fn encodes_reserved_characters() {
    let draft = MailDraft::new("A&B", "b@y.org", "50% off? yes=no #1");
    let uri = draft.mailto(&MailSettings::default());

    let (_, query) = uri.split_once('?').unwrap();
    let fields: Vec<&str> = query.split('&').collect();

    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0], "subject=Portfolio%20message%20from%20A%26B");
    assert!(fields[1].ends_with("50%25%20off%3F%20yes%3Dno%20%231"));
}

#[test]
fn missing_fields_still_compose() {
    let draft = MailDraft::default();

    assert_eq!(
        draft.mailto(&MailSettings::default()),
        "mailto:jvravichandra03@gmail.com?subject=Portfolio%20message%20from%20&body=From%3A%20%20%3C%3E%0A%0A"
    );
}

#[test]
fn uses_configured_address() {
    let settings = MailSettings {
        address: "me@example.com".to_string(),
        subject_prefix: "Hello from".to_string(),
    };
    let uri = MailDraft::new("Bo", "", "").mailto(&settings);

    assert!(uri.starts_with("mailto:me@example.com?subject=Hello%20from%20Bo&body="));
}

#[test]
fn form_attribute_overrides_address_only() {
    let settings = MailSettings {
        address: "me@example.com".to_string(),
        subject_prefix: "Hello from".to_string(),
    };

    assert_eq!(settings.for_form(None), settings);
    assert_eq!(settings.for_form(Some("")), settings);
    assert_eq!(settings.for_form(Some("   ")), settings);

    let overridden = settings.for_form(Some(" desk@example.org "));

    assert_eq!(overridden.address, "desk@example.org");
    assert_eq!(overridden.subject_prefix, "Hello from");
}

#[test]
fn loaded_settings_reach_every_form() {
    let loaded = MailSettings {
        address: "me@example.com".to_string(),
        ..Default::default()
    };
    let uri = MailDraft::new("Ann", "a@x.com", "Hi").mailto(&loaded.for_form(None));

    assert!(uri.starts_with("mailto:me@example.com?"));
}
