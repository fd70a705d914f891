//! Two-column layout for authenticated areas: sidebar plus page content,
//! under the shared application header.

use crate::components::layout::{app_shell::AppShell, sidebar::Sidebar};
use leptos::prelude::*;

#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex gap-6">
                <Sidebar />
                <section class="flex-1 min-w-0">{children()}</section>
            </div>
        </AppShell>
    }
}
