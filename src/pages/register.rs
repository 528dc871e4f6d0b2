//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::alert_message::AlertMessage;
use crate::components::auth_card::AuthCard;
use crate::net::api::{AuthApi, Credentials};
use crate::state::flow::{self, FlowState};
use crate::state::validate::{FormInput, is_valid_email, is_valid_password};

/// Register form — email and password, submit disabled until both pass
/// client-side validation. On success both fields are cleared and the
/// flow redirects to `/login` after a short delay.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<AuthApi>();
    let navigate = use_navigate();

    let flow = RwSignal::new(FlowState::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let email_valid = move || is_valid_email(&email.get());
    let password_valid = move || is_valid_password(&password.get());
    let submitting = move || flow.with(FlowState::is_submitting);
    let disabled = move || submitting() || !email_valid() || !password_valid();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = FormInput {
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            token: String::new(),
        };
        let api = api.clone();
        let navigate = navigate.clone();
        flow::submit(
            flow,
            &flow::REGISTER,
            input,
            move |input| async move {
                api.register(&Credentials { email: input.email, password: input.password })
                    .await
            },
            move || {
                email.set(String::new());
                password.set(String::new());
            },
            move |to: &str| navigate(to, NavigateOptions::default()),
        );
    };

    view! {
        <AuthCard title="Create account" subtitle="Sign up to access the dashboard and features.">
            <form on:submit=on_submit novalidate=true>
                <div class="form-field">
                    <label class="form-label" for="register-email">
                        "Email"
                    </label>
                    <input
                        id="register-email"
                        class="form-control"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=email
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            flow.update(FlowState::edited);
                        }
                    />
                </div>

                <div class="form-field">
                    <label class="form-label" for="register-password">
                        "Password"
                    </label>
                    <input
                        id="register-password"
                        class="form-control"
                        type="password"
                        autocomplete="new-password"
                        prop:value=password
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            flow.update(FlowState::edited);
                        }
                    />
                </div>

                <button type="submit" class="btn btn--primary" disabled=disabled>
                    {move || if submitting() { "Registering..." } else { "Register" }}
                </button>
            </form>

            <AlertMessage alert=Signal::derive(move || flow.with(|f| f.alert.clone()))/>

            <div class="footer-note">
                "Already have an account? " <a href="/login">"Login"</a>
            </div>
        </AuthCard>
    }
}
