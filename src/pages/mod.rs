//! Auth form pages. Each page owns its field signals and one
//! [`FlowState`](crate::state::flow::FlowState); everything beyond markup
//! is delegated to `state::flow` and `net::api`.

pub mod forgot_password;
pub mod login;
pub mod register;
pub mod reset_password;
