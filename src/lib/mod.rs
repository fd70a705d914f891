//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Session lifecycle
//!
//! 1. **Login:** `POST /auth/login/` returns an access/refresh token pair which
//!    is persisted through the session store in `features::auth::session`.
//! 2. **Requests:** every API call made through [`api`] attaches the stored
//!    access token as a `Bearer` credential.
//! 3. **Recovery:** a 401 on a non-auth endpoint triggers exactly one silent
//!    refresh (`POST /auth/refresh/`) and one retry of the original request.
//!    If recovery fails, both tokens are cleared and the original error
//!    surfaces to the caller.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated token handling in routes and features. Callers must still avoid
//! logging token material.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod theme;

pub(crate) use errors::AppError;
