//! Integration tests for the Validate derive macro.
//!
//! These tests verify that the generated field tables drive the engine
//! the same way a hand-written table does.

use rulecheck::{validate, FieldValue, RuleMarker, Validate, ValidationReport, Validator};

#[derive(Debug, Validate)]
struct UserRegistration {
    #[rule(required)]
    #[rule(length(min = 10, max = 255))]
    user: String,

    #[rule(required)]
    #[rule(email)]
    email: String,
}

fn registration(user: &str, email: &str) -> UserRegistration {
    UserRegistration {
        user: user.to_string(),
        email: email.to_string(),
    }
}

#[test]
fn sample_registration_reports_short_user() {
    let report = registration("Tio Jobs", "admin@admin.com").validate();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "user": ["Invalid value for 'user' using 'Length' validation."]
        })
    );
}

#[test]
fn valid_registration_passes() {
    let report = registration("Tio Jobs Senior", "admin@admin.com").validate();
    assert!(report.is_empty());
    assert_eq!(report.len(), 0);
}

#[test]
fn empty_fields_fail_required_and_following_rules() {
    let report = registration("", "").validate();

    assert_eq!(
        report.get("user").unwrap(),
        [
            "Invalid value for 'user' using 'Required' validation.",
            "Invalid value for 'user' using 'Length' validation.",
        ]
    );
    assert_eq!(
        report.get("email").unwrap(),
        [
            "Invalid value for 'email' using 'Required' validation.",
            "Invalid value for 'email' using 'Email' validation.",
        ]
    );
}

#[derive(Validate)]
struct Pin {
    #[rule(required)]
    code: String,
}

#[test]
fn zero_string_fails_required() {
    let report = Pin { code: "0".into() }.validate();
    assert_eq!(report.len(), 1);
    assert_eq!(
        report.get("code").unwrap(),
        ["Invalid value for 'code' using 'Required' validation."]
    );

    assert!(Pin { code: "00".into() }.validate().is_empty());
}

#[test]
fn user_length_boundaries() {
    for (len, ok) in [(9, false), (10, true), (255, true), (256, false)] {
        let report = registration(&"u".repeat(len), "admin@admin.com").validate();
        assert_eq!(report.is_empty(), ok, "length {len}");
        if !ok {
            assert_eq!(
                report.get("user").unwrap(),
                ["Invalid value for 'user' using 'Length' validation."]
            );
        }
    }
}

#[test]
fn email_samples() {
    assert!(registration("a valid user", "admin@admin.com")
        .validate()
        .is_empty());

    for bad in ["not-an-email", "@admin.com", "admin@"] {
        let report = registration("a valid user", bad).validate();
        assert_eq!(
            report.get("email").unwrap(),
            ["Invalid value for 'email' using 'Email' validation."],
            "{bad}"
        );
    }
}

#[test]
fn reports_do_not_leak_between_calls() {
    let validator = Validator::new();

    let first = validator.validate(&registration("", "broken"));
    assert_eq!(first.field_count(), 2);

    let second = validator.validate(&registration("a valid user", "admin@admin.com"));
    assert!(second.is_empty());

    // the first report is untouched by the second pass
    assert_eq!(first.len(), 3);
}

#[test]
fn check_and_validated() {
    let err: ValidationReport = registration("short", "admin@admin.com")
        .check()
        .unwrap_err();
    assert!(err.contains("user"));

    let ok = registration("long enough name", "admin@admin.com")
        .validated()
        .unwrap();
    assert_eq!(ok.user, "long enough name");
}

#[test]
fn report_is_an_error_type() {
    fn register(user: &str) -> Result<UserRegistration, Box<dyn std::error::Error>> {
        Ok(registration(user, "admin@admin.com").validated()?)
    }

    let err = register("short").unwrap_err();
    assert_eq!(err.to_string(), "validation failed: 1 error(s)");
    assert!(register("long enough name").is_ok());
}

// Struct mixing value kinds and unannotated fields
#[derive(Validate)]
struct Profile {
    #[rule(required)]
    age: u32,

    #[rule(required, length(max = 3))]
    tags: Vec<String>,

    #[rule(email)]
    backup_email: Option<String>,

    #[allow(dead_code)]
    notes: String,
}

#[test]
fn mixed_value_kinds() {
    let profile = Profile {
        age: 0,
        tags: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        backup_email: None,
        notes: String::new(),
    };
    let report = profile.validate();

    assert_eq!(
        report.field_names().collect::<Vec<_>>(),
        ["age", "tags", "backup_email"]
    );
    assert_eq!(
        report.get("tags").unwrap(),
        ["Invalid value for 'tags' using 'Length' validation."]
    );
    assert!(!report.contains("notes"));
}

#[test]
fn derived_table_exposes_markers() {
    let profile = Profile {
        age: 4,
        tags: Vec::new(),
        backup_email: Some("x@y.io".into()),
        notes: String::new(),
    };
    let fields = profile.fields();

    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0].value, FieldValue::UInt(4));
    assert_eq!(
        fields[1].markers,
        [
            RuleMarker::Required,
            RuleMarker::Length {
                min: 0,
                max: usize::MAX
            }
        ]
    );
    assert_eq!(fields[2].value, FieldValue::Str("x@y.io"));
}

// Generic struct with raw identifier
#[derive(Validate)]
struct Wrapper<T: rulecheck::AsFieldValue> {
    #[rule(required)]
    r#type: T,
}

#[test]
fn generic_and_raw_identifier_fields() {
    let report = validate(&Wrapper { r#type: 0_i64 });
    assert_eq!(
        report.get("type").unwrap(),
        ["Invalid value for 'type' using 'Required' validation."]
    );
    assert!(validate(&Wrapper { r#type: "x" }).is_empty());
}
