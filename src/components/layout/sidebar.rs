//! Side navigation for the owner dashboard and the admin area.

use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let pathname = move || location.pathname.get();
    let is_admin = move || {
        auth.user
            .get()
            .map(|user| user.is_admin())
            .unwrap_or(false)
    };

    view! {
        <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto">
            <nav class="flex-1 px-4 py-6 space-y-8">
                <div>
                    <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                        "Portfolio"
                    </h3>
                    <div class="mt-2 space-y-1">
                        <SidebarLink
                            target="/dashboard"
                            icon="dashboard"
                            label="Overview"
                            active=move || pathname() == "/dashboard"
                        />
                        <SidebarLink
                            target="/dashboard/about"
                            icon="person"
                            label="About"
                            active=move || pathname() == "/dashboard/about"
                        />
                        <SidebarLink
                            target="/dashboard/projects"
                            icon="folder"
                            label="Projects"
                            active=move || pathname() == "/dashboard/projects"
                        />
                        <SidebarLink
                            target="/dashboard/skills"
                            icon="star"
                            label="Skills"
                            active=move || pathname() == "/dashboard/skills"
                        />
                        <SidebarLink
                            target="/dashboard/experience"
                            icon="work"
                            label="Experience"
                            active=move || pathname() == "/dashboard/experience"
                        />
                        <SidebarLink
                            target="/dashboard/education"
                            icon="school"
                            label="Education"
                            active=move || pathname() == "/dashboard/education"
                        />
                        <SidebarLink
                            target="/dashboard/messages"
                            icon="mail"
                            label="Messages"
                            active=move || pathname() == "/dashboard/messages"
                        />
                    </div>
                </div>

                <Show when=is_admin>
                    <div>
                        <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Administration"
                        </h3>
                        <div class="mt-2 space-y-1">
                            <SidebarLink
                                target="/admin"
                                icon="monitoring"
                                label="System Overview"
                                active=move || pathname() == "/admin"
                            />
                            <SidebarLink
                                target="/admin/users"
                                icon="group"
                                label="Users"
                                active=move || pathname().starts_with("/admin/users")
                            />
                            <SidebarLink
                                target="/admin/messages"
                                icon="mail"
                                label="Messages"
                                active=move || pathname() == "/admin/messages"
                            />
                        </div>
                    </div>
                </Show>
            </nav>
        </aside>
    }
}

#[component]
fn SidebarLink<F>(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    active: F,
) -> impl IntoView
where
    F: Fn() -> bool + Clone + Send + Sync + 'static,
{
    let active_1 = active.clone();
    let active_2 = active.clone();
    let active_3 = active.clone();
    let active_4 = active.clone();
    let active_5 = active.clone();
    let active_6 = active.clone();
    let active_7 = active.clone();
    let active_8 = active.clone();
    let active_9 = active.clone();
    let active_10 = active.clone();
    let active_11 = active.clone();
    let active_12 = active.clone();
    let active_13 = active.clone();

    view! {
        <A
            href=move || target.to_string()
            {..}
            attr:class="group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors"
            class:text-indigo-600=move || active_1()
            class:bg-indigo-50=move || active_2()
            class:dark:bg-indigo-900=move || active_3()
            class:dark:text-indigo-400=move || active_4()
            class:text-gray-600=move || !active_5()
            class:dark:text-gray-300=move || !active_6()
            class:hover:bg-gray-50=move || !active_7()
            class:dark:hover:bg-gray-800=move || !active_8()
            class:hover:text-gray-900=move || !active_9()
        >
            <span
                class="material-symbols-outlined mr-3 text-xl transition-colors"
                class:text-indigo-600=move || active_10()
                class:dark:text-indigo-400=move || active_11()
                class:text-gray-400=move || !active_12()
                class:group-hover:text-gray-900=move || {
                    let active = active_13.clone();
                    !active()
                }
            >
                {icon}
            </span>
            {label}
        </A>
    }
}
