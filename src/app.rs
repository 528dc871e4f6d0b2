//! Root application component with routing and the API client context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::AuthApi;
use crate::pages::{
    forgot_password::ForgotPasswordPage, login::LoginPage, register::RegisterPage,
    reset_password::ResetPasswordPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the [`AuthApi`] client via context and sets up client-side
/// routing. Each form page owns its own state; nothing is shared between
/// them beyond the API client.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AuthApi::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-ui.css"/>
        <Title text="Auth Demo"/>

        <Router>
            <nav class="navbar">
                <a class="navbar__brand" href="/">
                    "Auth Demo"
                </a>
                <div class="navbar__links">
                    <a class="navbar__link" href="/register">
                        "Register"
                    </a>
                    <a class="navbar__link" href="/login">
                        "Login"
                    </a>
                </div>
            </nav>

            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RegisterPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route
                    path=(StaticSegment("reset-password"), ParamSegment("token"))
                    view=ResetPasswordPage
                />
            </Routes>
        </Router>
    }
}
