//! Auth feature module covering login, registration, session persistence, and
//! route gating. It keeps authentication logic out of the UI and must stay
//! aligned with backend token expectations. This module touches security
//! boundaries and must avoid logging token material.
//!
//! Flow Overview: Login stores an access/refresh token pair and hydrates the
//! in-memory auth state. Every API call attaches the access token; an expired
//! session is recovered transparently by the HTTP client in `app_lib::api`.
//! Guards gate page rendering on local token validity plus, for role-gated
//! areas, one fresh `/auth/me/` round-trip per mount.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod gate;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::{RequireAdmin, RequireAuth, RequireUser};
