mod app_shell;
mod dashboard_shell;
mod sidebar;

pub(crate) use app_shell::AppShell;
pub(crate) use dashboard_shell::DashboardShell;
