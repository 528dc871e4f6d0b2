//! Forgot-password page.

use leptos::prelude::*;

use crate::components::alert_message::AlertMessage;
use crate::components::auth_card::AuthCard;
use crate::net::api::AuthApi;
use crate::state::flow::{self, FlowState};
use crate::state::validate::FormInput;

/// Forgot-password form — asks for an email and requests a reset link.
/// One success locks the form ("Link Sent"); there is no redirect.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let api = expect_context::<AuthApi>();

    let flow = RwSignal::new(FlowState::default());
    let email = RwSignal::new(String::new());

    let submitting = move || flow.with(FlowState::is_submitting);
    let locked = move || flow.with(|f| f.locked);
    let disabled = move || submitting() || locked();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = FormInput {
            email: email.get_untracked().trim().to_owned(),
            ..FormInput::default()
        };
        let api = api.clone();
        flow::submit(
            flow,
            &flow::FORGOT_PASSWORD,
            input,
            move |input| async move { api.forgot_password(&input.email).await },
            move || email.set(String::new()),
            |_| {},
        );
    };

    let button_label = move || {
        flow.with(|f| {
            if f.is_submitting() {
                "Sending..."
            } else if f.locked {
                "Link Sent"
            } else {
                "Send Reset Link"
            }
        })
    };

    view! {
        <AuthCard title="Forgot Password">
            <form on:submit=on_submit novalidate=true>
                <div class="form-field">
                    <label class="form-label" for="forgot-email">
                        "Email"
                    </label>
                    <input
                        id="forgot-email"
                        class="form-control"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=email
                        disabled=disabled
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            flow.update(FlowState::edited);
                        }
                    />
                </div>

                <button type="submit" class="btn btn--accent" disabled=disabled>
                    {button_label}
                </button>
            </form>

            <AlertMessage alert=Signal::derive(move || flow.with(|f| f.alert.clone()))/>

            <div class="footer-note">
                "We'll send a secure link to your email to reset your password."
            </div>
        </AuthCard>
    }
}
