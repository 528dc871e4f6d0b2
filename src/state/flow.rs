//! Per-form submission flow: one generic state machine for all four auth
//! forms.
//!
//! Each form owns one [`FlowState`] in an `RwSignal` and a static
//! [`FormConfig`] naming its preconditions, default success message, and
//! optional post-success redirect. The machine settles every submission
//! into exactly one alert; no parallel requests, no stacked alerts.
//!
//! LIFECYCLE
//! =========
//! idle -> (synchronous validation) -> submitting -> succeeded | failed
//! -> idle on next edit or submission. Scheduled work (alert dismissal,
//! delayed redirect) is epoch-guarded and uses `try_update`, so a timer
//! firing after the page is torn down or after a newer alert replaced the
//! old one is a no-op.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use super::alert::Alert;
use super::validate::{Check, FormInput, run_checks};
use crate::net::normalize::ApiError;

/// Where the submission flow currently stands. Validation is synchronous
/// inside [`FlowState::begin_submit`] and never observable as a phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Outcome of a submit attempt, decided before any network traffic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    /// Refused: a request is already in flight, or the form is locked.
    Rejected,
    /// A precondition failed; settled locally with a danger alert.
    Invalid,
    /// Preconditions hold; the caller must issue exactly one request.
    Proceed,
}

/// A one-shot delayed navigation after a successful submission.
#[derive(Clone, Copy, Debug)]
pub struct Redirect {
    pub to: &'static str,
    pub delay_ms: u32,
}

/// Static per-form parameters for the shared flow machine.
pub struct FormConfig {
    pub checks: &'static [Check],
    pub success_default: &'static str,
    pub redirect: Option<Redirect>,
    /// Refuse further submissions after one success (forgot-password:
    /// the link is already sent).
    pub lock_after_success: bool,
}

pub const REGISTER: FormConfig = FormConfig {
    checks: &[Check::EmailFormat, Check::PasswordMin],
    success_default: "Registered successfully.",
    redirect: Some(Redirect { to: "/login", delay_ms: 1200 }),
    lock_after_success: false,
};

pub const LOGIN: FormConfig = FormConfig {
    checks: &[Check::EmailPresent, Check::PasswordPresent],
    success_default: "Logged in",
    redirect: Some(Redirect { to: "/", delay_ms: 900 }),
    lock_after_success: false,
};

pub const FORGOT_PASSWORD: FormConfig = FormConfig {
    checks: &[Check::EmailFormat],
    success_default: "Password reset link has been sent.",
    redirect: None,
    lock_after_success: true,
};

pub const RESET_PASSWORD: FormConfig = FormConfig {
    checks: &[Check::TokenPresent, Check::PasswordMin],
    success_default: "Password has been reset",
    redirect: Some(Redirect { to: "/login", delay_ms: 1500 }),
    lock_after_success: false,
};

/// The per-form state machine.
#[derive(Clone, Debug, Default)]
pub struct FlowState {
    pub phase: Phase,
    pub alert: Option<Alert>,
    /// Bumped on every alert change; scheduled dismissals carry the epoch
    /// they were armed for and are ignored once stale.
    pub alert_epoch: u64,
    pub locked: bool,
}

impl FlowState {
    /// Validate and, if preconditions hold, enter `Submitting`.
    ///
    /// Re-entry while `Submitting` (or after a locking success) is
    /// `Rejected` — this is the double-submit guard. A failed check
    /// settles to `Failed` immediately; the caller must not issue a
    /// network call unless `Proceed` is returned.
    pub fn begin_submit(&mut self, config: &FormConfig, input: &FormInput) -> SubmitAction {
        if self.phase == Phase::Submitting || self.locked {
            return SubmitAction::Rejected;
        }
        if let Err(message) = run_checks(config.checks, input) {
            self.phase = Phase::Failed;
            self.set_alert(Alert::danger(message));
            return SubmitAction::Invalid;
        }
        self.phase = Phase::Submitting;
        self.clear_alert();
        SubmitAction::Proceed
    }

    /// Settle the in-flight submission as a success.
    ///
    /// Prefers the server's message over the form default, and locks the
    /// form when the config says one success is enough.
    pub fn settle_success(&mut self, config: &FormConfig, server_message: Option<String>) {
        self.phase = Phase::Succeeded;
        if config.lock_after_success {
            self.locked = true;
        }
        let message = server_message.unwrap_or_else(|| config.success_default.to_owned());
        self.set_alert(Alert::success(message));
    }

    /// Settle the in-flight submission as a failure.
    pub fn settle_error(&mut self, err: &ApiError) {
        self.phase = Phase::Failed;
        self.set_alert(Alert::danger(err.message.clone()));
    }

    /// Auto-dismiss callback: clears the alert only if `epoch` still
    /// matches, so a stale timer never erases a newer alert.
    pub fn dismiss_alert(&mut self, epoch: u64) {
        if epoch == self.alert_epoch {
            self.alert = None;
        }
    }

    /// A user edit in a settled state returns the machine to `Idle`.
    /// The alert stays until dismissed or superseded.
    pub fn edited(&mut self) {
        if matches!(self.phase, Phase::Succeeded | Phase::Failed) {
            self.phase = Phase::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    fn set_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
        self.alert_epoch += 1;
    }

    fn clear_alert(&mut self) {
        self.alert = None;
        self.alert_epoch += 1;
    }
}

/// Drive one submission end to end in the browser.
///
/// Sequence: synchronous validation, at most one network call, settle,
/// clear sensitive fields on success, arm the epoch-guarded alert
/// dismissal, then the one-shot delayed redirect if configured. All
/// signal writes go through `try_update`: if the page has been torn down
/// by the time a timer fires, the write is silently dropped.
///
/// On the server this is a no-op, like the API stubs: submission is only
/// meaningful in the browser.
pub fn submit<Op, Fut>(
    flow: leptos::prelude::RwSignal<FlowState>,
    config: &'static FormConfig,
    input: FormInput,
    operation: Op,
    clear_sensitive: impl Fn() + 'static,
    navigate: impl Fn(&str) + 'static,
) where
    Op: FnOnce(FormInput) -> Fut + 'static,
    Fut: Future<Output = Result<crate::net::normalize::RawBody, ApiError>> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::Update;

        let action = flow
            .try_update(|f| f.begin_submit(config, &input))
            .unwrap_or(SubmitAction::Rejected);

        match action {
            SubmitAction::Rejected => {}
            SubmitAction::Invalid => schedule_dismiss(flow),
            SubmitAction::Proceed => {
                leptos::task::spawn_local(async move {
                    match operation(input).await {
                        Ok(body) => {
                            let message = crate::net::normalize::success_message(&body);
                            let _ = flow.try_update(|f| f.settle_success(config, message));
                            clear_sensitive();
                            schedule_dismiss(flow);
                            if let Some(redirect) = config.redirect {
                                gloo_timers::future::sleep(std::time::Duration::from_millis(
                                    u64::from(redirect.delay_ms),
                                ))
                                .await;
                                navigate(redirect.to);
                            }
                        }
                        Err(err) => {
                            leptos::logging::warn!("auth request failed: {err}");
                            let _ = flow.try_update(|f| f.settle_error(&err));
                            schedule_dismiss(flow);
                        }
                    }
                });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (flow, config, input, operation, clear_sensitive, navigate);
    }
}

/// Arm the auto-dismiss timer for whatever alert is currently shown.
#[cfg(feature = "hydrate")]
fn schedule_dismiss(flow: leptos::prelude::RwSignal<FlowState>) {
    use leptos::prelude::{Update, With};

    let Some(epoch) = flow.try_with(|f| f.alert_epoch) else {
        return;
    };
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
            super::alert::ALERT_DISMISS_MS,
        )))
        .await;
        let _ = flow.try_update(|f| f.dismiss_alert(epoch));
    });
}
