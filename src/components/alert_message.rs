//! Transient alert box shown under each form.

use leptos::prelude::*;

use crate::state::alert::Alert;

/// Renders the current alert, or nothing when there is none.
#[component]
pub fn AlertMessage(#[prop(into)] alert: Signal<Option<Alert>>) -> impl IntoView {
    view! {
        {move || {
            alert
                .get()
                .map(|a| {
                    view! {
                        <div role="alert" class=a.kind.css_class()>
                            {a.message}
                        </div>
                    }
                })
        }}
    }
}
