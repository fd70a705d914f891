//! Contact-message inbox: messages visitors send through a public portfolio's
//! contact form, read and answered by the portfolio owner (admins see every
//! user's messages through the same endpoints).

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
