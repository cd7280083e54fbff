use super::*;

fn filled() -> ContactState {
    ContactState {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: String::new(),
        message: "Hello".to_owned(),
        ..ContactState::default()
    }
}

// =============================================================
// FormStatus
// =============================================================

#[test]
fn form_status_default_is_hidden() {
    assert_eq!(FormStatus::default(), FormStatus::Hidden);
    assert_eq!(FormStatus::Hidden.message(), None);
}

#[test]
fn form_status_classes() {
    assert_eq!(FormStatus::Sending.class(), "loading");
    assert_eq!(FormStatus::Sent.class(), "success");
    assert_eq!(FormStatus::Failed.class(), "error");
    assert_eq!(FormStatus::Invalid("x".to_owned()).class(), "error");
}

#[test]
fn only_settled_statuses_auto_hide() {
    assert!(!FormStatus::Hidden.auto_hides());
    assert!(!FormStatus::Sending.auto_hides());
    assert!(FormStatus::Sent.auto_hides());
    assert!(FormStatus::Failed.auto_hides());
    assert!(FormStatus::Invalid("x".to_owned()).auto_hides());
}

#[test]
fn invalid_status_shows_reason() {
    let status = FormStatus::Invalid("please fill in your name".to_owned());
    assert_eq!(status.message(), Some("please fill in your name"));
}

// =============================================================
// ContactState
// =============================================================

#[test]
fn draft_validates_fields() {
    assert!(filled().draft().is_ok());
    assert_eq!(
        ContactState::default().draft(),
        Err(ContactError::Missing("name"))
    );
}

#[test]
fn set_status_bumps_sequence() {
    let mut state = ContactState::default();
    let first = state.set_status(FormStatus::Sending);
    let second = state.set_status(FormStatus::Sent);
    assert_eq!(second, first + 1);
    assert_eq!(state.status, FormStatus::Sent);
}

#[test]
fn hide_if_current_hides_settled_status() {
    let mut state = ContactState::default();
    let seq = state.set_status(FormStatus::Failed);
    state.hide_if_current(seq);
    assert_eq!(state.status, FormStatus::Hidden);
}

#[test]
fn stale_hide_timer_is_ignored() {
    let mut state = ContactState::default();
    let stale = state.set_status(FormStatus::Failed);
    state.set_status(FormStatus::Sending);
    state.hide_if_current(stale);
    assert_eq!(state.status, FormStatus::Sending);
}

#[test]
fn sending_status_never_auto_hides() {
    let mut state = ContactState::default();
    let seq = state.set_status(FormStatus::Sending);
    state.hide_if_current(seq);
    assert_eq!(state.status, FormStatus::Sending);
}

#[test]
fn finish_success_clears_form() {
    let mut state = filled();
    state.finish(true);
    assert_eq!(state.status, FormStatus::Sent);
    assert!(state.name.is_empty());
    assert!(state.message.is_empty());
}

#[test]
fn finish_failure_keeps_fields() {
    let mut state = filled();
    state.finish(false);
    assert_eq!(state.status, FormStatus::Failed);
    assert_eq!(state.name, "Ada");
}
