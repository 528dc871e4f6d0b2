//! Card wrapper shared by all auth pages.

use leptos::prelude::*;

/// Centered card with a title, optional subtitle, and the form as children.
#[component]
pub fn AuthCard(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-center">
            <div class="auth-card">
                <h1 class="auth-card__title">{title}</h1>
                {subtitle.map(|s| view! { <p class="auth-card__subtitle">{s}</p> })}
                {children()}
            </div>
        </div>
    }
}
