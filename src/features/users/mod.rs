//! Admin user-management feature: paginated account listing, approval and
//! activation toggles, and the system overview counters.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
