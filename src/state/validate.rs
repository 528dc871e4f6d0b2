//! Client-side input validation for the auth forms.
//!
//! Checks are declarative: each form lists the [`Check`]s it needs and the
//! flow machine runs them in order before any network call. The first
//! failing check supplies the user-facing message.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum accepted password length, matching the backend's policy.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Field values snapshotted at submit time. Unused fields stay empty.
#[derive(Clone, Debug, Default)]
pub struct FormInput {
    pub email: String,
    pub password: String,
    pub token: String,
}

/// A single client-side precondition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    EmailFormat,
    EmailPresent,
    PasswordMin,
    PasswordPresent,
    TokenPresent,
}

impl Check {
    fn passes(self, input: &FormInput) -> bool {
        match self {
            Self::EmailFormat => is_valid_email(&input.email),
            Self::EmailPresent => !input.email.trim().is_empty(),
            Self::PasswordMin => is_valid_password(&input.password),
            Self::PasswordPresent => !input.password.is_empty(),
            Self::TokenPresent => !input.token.trim().is_empty(),
        }
    }

    /// Message shown when this check fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::EmailFormat => "Please enter a valid email address.",
            Self::EmailPresent => "Email is required.",
            Self::PasswordMin => "Password must be at least 6 characters.",
            Self::PasswordPresent => "Password is required.",
            Self::TokenPresent => "Invalid or missing token.",
        }
    }
}

/// Run checks in order; the first failure wins.
///
/// # Errors
///
/// Returns the failing check's user-facing message.
pub fn run_checks(checks: &[Check], input: &FormInput) -> Result<(), &'static str> {
    match checks.iter().find(|check| !check.passes(input)) {
        Some(check) => Err(check.failure_message()),
        None => Ok(()),
    }
}

/// Basic `local@domain` shape check: exactly one `@`, a non-empty local
/// part, a dotted domain with non-empty labels, and no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}

/// Password length check, counted in characters rather than bytes.
pub fn is_valid_password(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LEN
}
