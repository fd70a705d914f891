//! Domain-level frontend features (auth, portfolio content, the message
//! inbox, user administration) and their shared logic. Routes import these
//! modules to keep view code focused while keeping security and API handling
//! in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod messages;
pub(crate) mod portfolio;
pub(crate) mod users;
