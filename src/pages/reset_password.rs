//! Reset-password page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::alert_message::AlertMessage;
use crate::components::auth_card::AuthCard;
use crate::net::api::AuthApi;
use crate::state::flow::{self, FlowState};
use crate::state::validate::FormInput;

/// Reset-password form — the token comes from the `:token` route
/// parameter, the user supplies the new password. On success the field is
/// cleared and the flow redirects to `/login` after a short delay.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let api = expect_context::<AuthApi>();
    let navigate = use_navigate();
    let params = use_params_map();

    let flow = RwSignal::new(FlowState::default());
    let password = RwSignal::new(String::new());

    let submitting = move || flow.with(FlowState::is_submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = FormInput {
            password: password.get_untracked(),
            token: params.get_untracked().get("token").unwrap_or_default(),
            ..FormInput::default()
        };
        let api = api.clone();
        let navigate = navigate.clone();
        flow::submit(
            flow,
            &flow::RESET_PASSWORD,
            input,
            move |input| async move { api.reset_password(&input.token, &input.password).await },
            move || password.set(String::new()),
            move |to: &str| navigate(to, NavigateOptions::default()),
        );
    };

    view! {
        <AuthCard title="Reset Password">
            <form on:submit=on_submit novalidate=true>
                <div class="form-field">
                    <label class="form-label" for="reset-password">
                        "New Password"
                    </label>
                    <input
                        id="reset-password"
                        class="form-control"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Enter new password"
                        prop:value=password
                        disabled=submitting
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            flow.update(FlowState::edited);
                        }
                    />
                </div>

                <button type="submit" class="btn btn--primary" disabled=submitting>
                    {move || if submitting() { "Resetting..." } else { "Reset Password" }}
                </button>
            </form>

            <AlertMessage alert=Signal::derive(move || flow.with(|f| f.alert.clone()))/>
        </AuthCard>
    }
}
