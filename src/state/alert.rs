#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// How long a transient alert stays visible before auto-dismissing.
pub const ALERT_DISMISS_MS: u32 = 6000;

/// Visual category of a transient alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
    Info,
    Warning,
}

impl AlertKind {
    /// CSS class for the alert box.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert alert--success",
            Self::Danger => "alert alert--danger",
            Self::Info => "alert alert--info",
            Self::Warning => "alert alert--warning",
        }
    }
}

/// A transient per-form alert. Exactly one (or none) exists per form;
/// a new outcome replaces the previous alert rather than stacking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Success, message: message.into() }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Danger, message: message.into() }
    }
}
