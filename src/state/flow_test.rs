use super::*;
use crate::state::alert::AlertKind;
use crate::state::validate::Check;

fn register_input() -> FormInput {
    FormInput {
        email: "you@example.com".to_owned(),
        password: "secret1".to_owned(),
        token: String::new(),
    }
}

// =============================================================
// Validation settles locally, before any network call
// =============================================================

#[test]
fn invalid_email_settles_error_without_network() {
    let mut flow = FlowState::default();
    let input = FormInput { email: "not-an-email".to_owned(), ..register_input() };

    let action = flow.begin_submit(&REGISTER, &input);

    assert_eq!(action, SubmitAction::Invalid);
    assert_eq!(flow.phase, Phase::Failed);
    let alert = flow.alert.unwrap();
    assert_eq!(alert.kind, AlertKind::Danger);
    assert_eq!(alert.message, "Please enter a valid email address.");
}

#[test]
fn short_password_settles_error_without_network() {
    let mut flow = FlowState::default();
    let input = FormInput { password: "12345".to_owned(), ..register_input() };

    assert_eq!(flow.begin_submit(&REGISTER, &input), SubmitAction::Invalid);
    assert_eq!(
        flow.alert.unwrap().message,
        "Password must be at least 6 characters."
    );
}

#[test]
fn short_password_blocks_reset_password_too() {
    let mut flow = FlowState::default();
    let input = FormInput {
        password: "12345".to_owned(),
        token: "tok".to_owned(),
        ..FormInput::default()
    };

    assert_eq!(flow.begin_submit(&RESET_PASSWORD, &input), SubmitAction::Invalid);
    assert_eq!(flow.phase, Phase::Failed);
}

#[test]
fn missing_token_blocks_reset_password() {
    let mut flow = FlowState::default();
    let input = FormInput { password: "secret1".to_owned(), ..FormInput::default() };

    assert_eq!(flow.begin_submit(&RESET_PASSWORD, &input), SubmitAction::Invalid);
    assert_eq!(flow.alert.unwrap().message, "Invalid or missing token.");
}

#[test]
fn invalid_email_blocks_forgot_password() {
    let mut flow = FlowState::default();
    let input = FormInput { email: "nope".to_owned(), ..FormInput::default() };

    assert_eq!(flow.begin_submit(&FORGOT_PASSWORD, &input), SubmitAction::Invalid);
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn valid_input_enters_submitting_and_clears_prior_alert() {
    let mut flow = FlowState::default();
    // Leave a settled error behind first.
    let bad = FormInput { email: "nope".to_owned(), ..register_input() };
    flow.begin_submit(&REGISTER, &bad);
    assert!(flow.alert.is_some());

    let action = flow.begin_submit(&REGISTER, &register_input());

    assert_eq!(action, SubmitAction::Proceed);
    assert_eq!(flow.phase, Phase::Submitting);
    assert!(flow.alert.is_none());
}

#[test]
fn double_submit_while_in_flight_is_rejected() {
    let mut flow = FlowState::default();
    assert_eq!(flow.begin_submit(&REGISTER, &register_input()), SubmitAction::Proceed);
    // Second trigger while submitting must not issue another call.
    assert_eq!(flow.begin_submit(&REGISTER, &register_input()), SubmitAction::Rejected);
    assert_eq!(flow.phase, Phase::Submitting);
}

#[test]
fn success_prefers_server_message() {
    let mut flow = FlowState::default();
    flow.begin_submit(&REGISTER, &register_input());

    flow.settle_success(&REGISTER, Some("Registered successfully".to_owned()));

    assert_eq!(flow.phase, Phase::Succeeded);
    let alert = flow.alert.unwrap();
    assert_eq!(alert.kind, AlertKind::Success);
    assert_eq!(alert.message, "Registered successfully");
}

#[test]
fn success_without_server_message_uses_form_default() {
    let mut flow = FlowState::default();
    flow.begin_submit(&REGISTER, &register_input());

    flow.settle_success(&REGISTER, None);

    assert_eq!(flow.alert.unwrap().message, "Registered successfully.");
}

#[test]
fn error_settles_with_the_api_message() {
    use crate::net::normalize::{ApiError, RawBody};

    let mut flow = FlowState::default();
    flow.begin_submit(&REGISTER, &register_input());

    let err = ApiError {
        message: "Email already exists".to_owned(),
        status: 409,
        body: RawBody::Empty,
    };
    flow.settle_error(&err);

    assert_eq!(flow.phase, Phase::Failed);
    let alert = flow.alert.unwrap();
    assert_eq!(alert.kind, AlertKind::Danger);
    assert_eq!(alert.message, "Email already exists");
}

// =============================================================
// Lock-after-success (forgot-password)
// =============================================================

#[test]
fn forgot_password_locks_after_success() {
    let mut flow = FlowState::default();
    let input = FormInput { email: "you@example.com".to_owned(), ..FormInput::default() };

    assert_eq!(flow.begin_submit(&FORGOT_PASSWORD, &input), SubmitAction::Proceed);
    flow.settle_success(&FORGOT_PASSWORD, None);

    assert!(flow.locked);
    assert_eq!(flow.alert.as_ref().unwrap().message, "Password reset link has been sent.");
    assert_eq!(flow.begin_submit(&FORGOT_PASSWORD, &input), SubmitAction::Rejected);
}

#[test]
fn register_does_not_lock_after_success() {
    let mut flow = FlowState::default();
    flow.begin_submit(&REGISTER, &register_input());
    flow.settle_success(&REGISTER, None);

    assert!(!flow.locked);
    assert_eq!(flow.begin_submit(&REGISTER, &register_input()), SubmitAction::Proceed);
}

// =============================================================
// Alert dismissal epochs
// =============================================================

#[test]
fn current_epoch_dismisses_the_alert() {
    let mut flow = FlowState::default();
    flow.begin_submit(&REGISTER, &register_input());
    flow.settle_success(&REGISTER, None);

    let epoch = flow.alert_epoch;
    flow.dismiss_alert(epoch);

    assert!(flow.alert.is_none());
}

#[test]
fn stale_epoch_does_not_erase_a_newer_alert() {
    let mut flow = FlowState::default();
    let bad = FormInput { email: "nope".to_owned(), ..register_input() };

    flow.begin_submit(&REGISTER, &bad);
    let stale = flow.alert_epoch;

    // A newer submission supersedes the alert before the timer fires.
    flow.begin_submit(&REGISTER, &register_input());
    flow.settle_success(&REGISTER, None);

    flow.dismiss_alert(stale);
    assert!(flow.alert.is_some(), "stale dismissal must not race the newer alert");

    flow.dismiss_alert(flow.alert_epoch);
    assert!(flow.alert.is_none());
}

// =============================================================
// Edits in settled states
// =============================================================

#[test]
fn edit_returns_failed_to_idle_keeping_the_alert() {
    let mut flow = FlowState::default();
    let bad = FormInput { email: "nope".to_owned(), ..register_input() };
    flow.begin_submit(&REGISTER, &bad);

    flow.edited();

    assert_eq!(flow.phase, Phase::Idle);
    assert!(flow.alert.is_some());
}

#[test]
fn edit_while_submitting_changes_nothing() {
    let mut flow = FlowState::default();
    flow.begin_submit(&REGISTER, &register_input());

    flow.edited();

    assert_eq!(flow.phase, Phase::Submitting);
}

// =============================================================
// Form configs
// =============================================================

#[test]
fn redirect_targets_match_the_flows() {
    assert_eq!(REGISTER.redirect.unwrap().to, "/login");
    assert_eq!(LOGIN.redirect.unwrap().to, "/");
    assert!(FORGOT_PASSWORD.redirect.is_none());
    assert_eq!(RESET_PASSWORD.redirect.unwrap().to, "/login");
}

#[test]
fn login_requires_both_fields_present() {
    assert_eq!(LOGIN.checks, &[Check::EmailPresent, Check::PasswordPresent]);
}
