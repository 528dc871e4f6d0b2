//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::alert_message::AlertMessage;
use crate::components::auth_card::AuthCard;
use crate::net::api::AuthApi;
use crate::state::flow::{self, FlowState};
use crate::state::validate::FormInput;

/// Login form — both fields must be non-empty. On success the flow
/// redirects home after a short delay; the session itself is established
/// by the backend (cookies), not by this page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<AuthApi>();
    let navigate = use_navigate();

    let flow = RwSignal::new(FlowState::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submitting = move || flow.with(FlowState::is_submitting);

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
            &flow::LOGIN,
            input,
            move |input| async move { api.login(&input.email, &input.password).await },
            move || password.set(String::new()),
            move |to: &str| navigate(to, NavigateOptions::default()),
        );
    };

    view! {
        <AuthCard title="Login">
            <form on:submit=on_submit novalidate=true>
                <div class="form-field">
                    <label class="form-label" for="login-email">
                        "Email"
                    </label>
                    <input
                        id="login-email"
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
                    <label class="form-label" for="login-password">
                        "Password"
                    </label>
                    <input
                        id="login-password"
                        class="form-control"
                        type="password"
                        autocomplete="current-password"
                        prop:value=password
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            flow.update(FlowState::edited);
                        }
                    />
                </div>

                <button type="submit" class="btn btn--primary" disabled=submitting>
                    {move || if submitting() { "Signing in..." } else { "Login" }}
                </button>
            </form>

            <AlertMessage alert=Signal::derive(move || flow.with(|f| f.alert.clone()))/>

            <div class="footer-note">
                "Forgot your password? " <a href="/forgot-password">"Reset it"</a>
            </div>
        </AuthCard>
    }
}
