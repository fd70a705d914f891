//! Admin area: system overview counters and user management. Both pages sit
//! behind the fail-closed admin guard.

mod messages;
mod overview;
mod users;

pub(crate) use messages::AdminMessagesPage;
pub(crate) use overview::AdminOverviewPage;
pub(crate) use users::AdminUsersPage;
