//! Network layer: the auth API client and response normalization.
//!
//! DESIGN
//! ======
//! `normalize` is pure Rust so the error-shaping contract can be unit
//! tested on the host; `api` owns the `gloo-net` calls and is the only
//! module that touches the browser's fetch machinery.

pub mod api;
pub mod normalize;
