mod admin;
mod dashboard;
mod forgot_password;
mod landing;
mod login;
mod not_found;
mod pending_approval;
mod portfolio;
mod register;
mod reset_password;
mod verify_email;

pub(crate) use admin::{AdminMessagesPage, AdminOverviewPage, AdminUsersPage};
pub(crate) use dashboard::{
    DashboardAboutPage, DashboardEducationPage, DashboardExperiencePage, DashboardHomePage,
    DashboardMessagesPage, DashboardProjectsPage, DashboardSkillsPage,
};
pub(crate) use forgot_password::ForgotPasswordPage;
pub(crate) use landing::LandingPage;
pub(crate) use login::{AdminLoginPage, LoginPage};
pub(crate) use not_found::NotFoundPage;
pub(crate) use pending_approval::PendingApprovalPage;
pub(crate) use portfolio::PortfolioPage;
pub(crate) use register::RegisterPage;
pub(crate) use reset_password::ResetPasswordPage;
pub(crate) use verify_email::VerifyEmailPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LandingPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/admin/login") view=AdminLoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/verify-email") view=VerifyEmailPage />
            <Route path=path!("/forgot-password") view=ForgotPasswordPage />
            <Route path=path!("/reset-password/:token") view=ResetPasswordPage />
            <Route path=path!("/pending-approval") view=PendingApprovalPage />
            <Route path=path!("/dashboard") view=DashboardHomePage />
            <Route path=path!("/dashboard/about") view=DashboardAboutPage />
            <Route path=path!("/dashboard/projects") view=DashboardProjectsPage />
            <Route path=path!("/dashboard/skills") view=DashboardSkillsPage />
            <Route path=path!("/dashboard/experience") view=DashboardExperiencePage />
            <Route path=path!("/dashboard/education") view=DashboardEducationPage />
            <Route path=path!("/dashboard/messages") view=DashboardMessagesPage />
            <Route path=path!("/admin") view=AdminOverviewPage />
            <Route path=path!("/admin/users") view=AdminUsersPage />
            <Route path=path!("/admin/messages") view=AdminMessagesPage />
            <Route path=path!("/:username") view=PortfolioPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
