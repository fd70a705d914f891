//! Dashboard landing: publish state and shortcuts into each section.

use crate::app_lib::theme::Theme;
use crate::components::DashboardShell;
use crate::features::auth::{state::use_auth, RequireUser};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DashboardHomePage() -> impl IntoView {
    view! {
        <RequireUser children=move || view! {
            <DashboardShell>
                <HomeContent />
            </DashboardShell>
        } />
    }
}

#[component]
fn HomeContent() -> impl IntoView {
    let auth = use_auth();
    let username = move || {
        auth.user
            .get()
            .map(|user| user.username)
            .unwrap_or_default()
    };
    let public_path = move || {
        auth.user.get().and_then(|user| {
            user.portfolio_published
                .then(|| format!("/{}", user.username_slug.unwrap_or(user.username)))
        })
    };

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class=Theme::TITLE>{move || format!("Welcome, {}", username())}</h1>
                <p class=Theme::SUBTLE>"Fill in each section, then share your page."</p>
            </div>

            {move || match public_path() {
                Some(path) => view! {
                    <A
                        href=path
                        {..}
                        class="inline-flex items-center gap-2 text-sm font-medium text-indigo-600 hover:text-indigo-800 dark:text-indigo-400"
                    >
                        <span class="material-symbols-outlined text-base">"open_in_new"</span>
                        "View your public page"
                    </A>
                }
                .into_any(),
                None => view! {
                    <p class=Theme::SUBTLE>
                        "Your portfolio isn't published yet. It goes live once an administrator publishes it."
                    </p>
                }
                .into_any(),
            }}

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <SectionCard
                    target="/dashboard/about"
                    icon="person"
                    title="About"
                    blurb="Your name, bio, photo, and CV."
                />
                <SectionCard
                    target="/dashboard/projects"
                    icon="folder"
                    title="Projects"
                    blurb="Things you've built, with links and screenshots."
                />
                <SectionCard
                    target="/dashboard/skills"
                    icon="star"
                    title="Skills"
                    blurb="What you work with and how well."
                />
                <SectionCard
                    target="/dashboard/experience"
                    icon="work"
                    title="Experience"
                    blurb="Roles you've held and what you did there."
                />
                <SectionCard
                    target="/dashboard/education"
                    icon="school"
                    title="Education"
                    blurb="Degrees and courses you've completed."
                />
                <SectionCard
                    target="/dashboard/messages"
                    icon="mail"
                    title="Messages"
                    blurb="What visitors sent through your contact form."
                />
            </div>
        </div>
    }
}

#[component]
fn SectionCard(
    target: &'static str,
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=target
            {..}
            class="group p-6 bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 shadow-sm hover:border-indigo-500 transition-all"
        >
            <div class="flex items-center gap-4">
                <div class="p-3 bg-indigo-50 dark:bg-indigo-900/30 rounded-lg text-indigo-600 dark:text-indigo-400 group-hover:scale-110 transition-transform">
                    <span class="material-symbols-outlined">{icon}</span>
                </div>
                <div>
                    <h2 class="font-semibold text-gray-900 dark:text-white">{title}</h2>
                    <p class="text-sm text-gray-500">{blurb}</p>
                </div>
            </div>
        </A>
    }
}
