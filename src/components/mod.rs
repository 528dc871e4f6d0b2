//! Shared presentation components for the auth pages.

pub mod alert_message;
pub mod auth_card;
