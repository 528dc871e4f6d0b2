//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`alert`, `validate`, `flow`) so the form
//! pages stay presentation-only. Everything here is plain Rust: the flow
//! machine and validators run identically on the host in unit tests and
//! inside `RwSignal`s in the browser.

pub mod alert;
pub mod flow;
pub mod validate;
