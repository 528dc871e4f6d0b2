use super::*;
use futures::executor::block_on;

// =============================================================
// Reset-token path encoding
// =============================================================

#[test]
fn plain_token_is_unchanged() {
    assert_eq!(
        reset_password_path("abc123DEF"),
        "/api/auth/reset-password/abc123DEF"
    );
}

#[test]
fn reserved_characters_are_percent_encoded() {
    assert_eq!(
        reset_password_path("a/b?c#d"),
        "/api/auth/reset-password/a%2Fb%3Fc%23d"
    );
}

#[test]
fn spaces_and_percent_signs_are_escaped() {
    assert_eq!(
        reset_password_path("a b%20"),
        "/api/auth/reset-password/a%20b%2520"
    );
}

#[test]
fn encoding_is_deterministic() {
    let token = "t/o k%e?n";
    assert_eq!(reset_password_path(token), reset_password_path(token));
}

// =============================================================
// Fail-fast preconditions (no network call involved)
// =============================================================

#[test]
fn forgot_password_rejects_empty_email_locally() {
    let api = AuthApi::new("http://example.test");
    let err = block_on(api.forgot_password("  ")).unwrap_err();
    assert_eq!(err.message, "Email is required.");
    assert_eq!(err.status, 0);
}

#[test]
fn reset_password_rejects_missing_token_locally() {
    let api = AuthApi::new("http://example.test");
    let err = block_on(api.reset_password("", "secret123")).unwrap_err();
    assert_eq!(err.message, "Invalid or missing token.");
    assert_eq!(err.status, 0);
}

#[test]
fn reset_password_rejects_empty_password_locally() {
    let api = AuthApi::new("http://example.test");
    let err = block_on(api.reset_password("tok", "")).unwrap_err();
    assert_eq!(err.message, "Password is required.");
}

// Without the `hydrate` feature every request short-circuits into the
// server-side stub error instead of touching the network.
#[cfg(not(feature = "hydrate"))]
#[test]
fn requests_are_stubbed_outside_the_browser() {
    let api = AuthApi::new("http://example.test");
    let err = block_on(api.forgot_password("you@example.com")).unwrap_err();
    assert_eq!(err.status, 0);
    assert_eq!(err.message, "not available on server");
}
