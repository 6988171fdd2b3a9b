//! Tests for the form wrapper and its observers.

use std::sync::{Arc, Mutex};

use formguard::{
    ControlStatus, EventKind, FieldDescriptor, Form, FormDescriptor, FormEvent, FormOptions,
    ValidationEngine,
};

fn signup_form() -> Form {
    let engine = Arc::new(ValidationEngine::default());
    Form::new(
        engine,
        [
            FieldDescriptor::from_attr("name", "", "required"),
            FieldDescriptor::from_attr("email", "", "required,email"),
        ],
    )
    .unwrap()
}

fn record(form: &mut Form, kinds: &[EventKind]) -> Arc<Mutex<Vec<FormEvent>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    for &kind in kinds {
        let sink = Arc::clone(&seen);
        form.subscribe(kind, move |event| sink.lock().unwrap().push(event.clone()));
    }
    seen
}

#[test]
fn test_change_emits_value_changed() {
    let mut form = signup_form();
    let seen = record(&mut form, &[EventKind::ValueChanged, EventKind::ValidationFailed]);

    form.change("name", "Ann").unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![FormEvent::ValueChanged {
            field: "name".into(),
            value: "Ann".into()
        }]
    );
}

#[test]
fn test_change_emits_primary_failure() {
    let mut form = signup_form();
    let seen = record(&mut form, &[EventKind::ValidationFailed]);

    form.change("email", "").unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![FormEvent::ValidationFailed {
            field: "email".into(),
            message: "The email field is required.".into()
        }]
    );
}

#[test]
fn test_submit_emits_submitted_last() {
    let mut form = signup_form();
    let seen = record(
        &mut form,
        &[
            EventKind::ValueChanged,
            EventKind::ValidationFailed,
            EventKind::Submitted,
        ],
    );

    let report = form.submit().unwrap();
    assert!(!report.valid);

    let events = seen.lock().unwrap();
    assert_eq!(events.last(), Some(&FormEvent::Submitted { valid: false }));
    let failures = events
        .iter()
        .filter(|e| e.kind() == EventKind::ValidationFailed)
        .count();
    assert_eq!(failures, 2);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut form = signup_form();
    let count = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&count);
    let id = form.subscribe(EventKind::ValueChanged, move |_| *sink.lock().unwrap() += 1);

    form.change("name", "a").unwrap();
    assert!(form.unsubscribe(id));
    form.change("name", "b").unwrap();

    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn test_can_submit_follows_validity() {
    let mut form = signup_form();
    assert!(!form.can_submit());

    form.change("name", "Ann").unwrap();
    form.change("email", "ann@lee.dev").unwrap();
    assert!(form.is_valid());
    assert!(form.can_submit());

    let mut lenient = signup_form().with_options(FormOptions {
        disable_submit_when_invalid: false,
    });
    assert!(lenient.can_submit());
    lenient.change("email", "nope").unwrap();
    assert!(lenient.can_submit());
    assert!(!lenient.is_valid());
}

#[test]
fn test_reset() {
    let engine = Arc::new(ValidationEngine::default());
    let mut form = Form::new(engine, [FieldDescriptor::from_attr("name", "Ann", "required")]).unwrap();

    form.change("name", "").unwrap();
    assert_eq!(form.control("name").unwrap().status(), ControlStatus::Invalid);

    form.reset();
    let control = form.control("name").unwrap();
    assert_eq!(control.status(), ControlStatus::Untouched);
    assert_eq!(control.value(), "Ann");
    assert!(!form.is_valid());

    assert!(form.submit().unwrap().valid);
}

#[test]
fn test_from_descriptor() {
    let descriptor = FormDescriptor::from_json(
        r#"{
            "config": { "unknown_rules": "fallback_required" },
            "options": { "disable_submit_when_invalid": false },
            "fields": [
                { "name": "name", "label": "Name", "value": "Ann", "rules": "required" },
                { "name": "phone", "rules": ["phone"] }
            ]
        }"#,
    )
    .unwrap();

    let mut form = Form::from_descriptor(descriptor).unwrap();
    assert!(!form.options().disable_submit_when_invalid);

    let report = form.submit().unwrap();
    assert_eq!(report.invalid_fields(), ["phone"]);
    assert_eq!(
        form.control("phone").unwrap().primary_error(),
        Some("The phone field is required.")
    );
}

#[test]
fn test_state_serializes() {
    let mut form = signup_form();
    form.change("email", "nope").unwrap();

    let json = serde_json::to_value(form.state()).unwrap();
    assert_eq!(json["is_valid"], false);
    assert_eq!(json["controls"][1]["name"], "email");
    assert_eq!(json["controls"][1]["rules"][1], "email");
    assert_eq!(
        json["controls"][1]["errors"][0],
        "The email field is not email type."
    );
}
