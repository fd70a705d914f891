//! Owner dashboard: the authenticated area where an approved member edits the
//! sections of their portfolio. Every page is wrapped in the approved-user
//! guard and the sidebar shell.

mod about;
mod education;
mod experience;
mod home;
mod messages;
mod projects;
mod skills;

pub(crate) use about::DashboardAboutPage;
pub(crate) use education::DashboardEducationPage;
pub(crate) use experience::DashboardExperiencePage;
pub(crate) use home::DashboardHomePage;
pub(crate) use messages::{DashboardMessagesPage, MessagesInbox};
pub(crate) use projects::DashboardProjectsPage;
pub(crate) use skills::DashboardSkillsPage;
