//! Admin overview page showing account and content counters.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, DashboardShell, Spinner};
use crate::features::auth::RequireAdmin;
use crate::features::users::{client, types::SystemOverview};
use leptos::prelude::*;

#[component]
pub fn AdminOverviewPage() -> impl IntoView {
    view! {
        <RequireAdmin children=move || view! {
            <DashboardShell>
                <OverviewContent />
            </DashboardShell>
        } />
    }
}

#[component]
fn OverviewContent() -> impl IntoView {
    let overview = LocalResource::new(|| client::system_overview());

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class=Theme::TITLE>"System Overview"</h1>
                    <p class=Theme::SUBTLE>"Accounts, content, and visitor messages."</p>
                </div>
                <button
                    on:click=move |_| overview.refetch()
                    class="p-2 text-gray-500 hover:text-indigo-600 transition-colors"
                >
                    <span class="material-symbols-outlined">"refresh"</span>
                </button>
            </div>

            <Suspense fallback=move || view! { <Spinner /> }.into_any()>
                {move || match overview.get() {
                    Some(Ok(data)) => render_stats_grid(data).into_any(),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

fn render_stats_grid(data: SystemOverview) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <div class=Theme::CARD>
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-sm font-semibold text-gray-500 uppercase tracking-wider">"Accounts"</h3>
                    <span class="material-symbols-outlined text-indigo-500">"group"</span>
                </div>
                <div class="space-y-2">
                    <StatRow label="Total" value=data.total_users />
                    <StatRow label="Active" value=data.active_users />
                    <StatRow label="Approved" value=data.approved_users />
                    <StatRow label="Pending" value=data.pending_users />
                    <StatRow label="Staff" value=data.staff_users />
                    <StatRow label="Superusers" value=data.superusers />
                </div>
            </div>

            <div class=Theme::CARD>
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-sm font-semibold text-gray-500 uppercase tracking-wider">"Content"</h3>
                    <span class="material-symbols-outlined text-emerald-500">"folder"</span>
                </div>
                <div class="space-y-2">
                    <StatRow label="Projects" value=data.total_projects />
                    <StatRow label="Experience entries" value=data.total_experiences />
                    <StatRow label="Education entries" value=data.total_educations />
                    <StatRow label="Skills" value=data.total_skills />
                    <StatRow label="About sections" value=data.total_about_me />
                </div>
            </div>

            <div class=Theme::CARD>
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-sm font-semibold text-gray-500 uppercase tracking-wider">"Messages"</h3>
                    <span class="material-symbols-outlined text-amber-500">"mail"</span>
                </div>
                <div class="space-y-2">
                    <StatRow label="Total" value=data.total_messages />
                    <StatRow label="New" value=data.new_messages />
                    <StatRow label="Read" value=data.read_messages />
                    <StatRow label="Replied" value=data.replied_messages />
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatRow(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="flex justify-between text-sm">
            <span class="text-gray-500">{label}</span>
            <span class="font-medium dark:text-white">{value}</span>
        </div>
    }
}
