//! Minimalistic 404 page for unknown routes and unpublished portfolios.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the not-found page with the shared shell. Top-level route fallback.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <NotFoundContent />
        </AppShell>
    }
}

/// Inner 404 content without the shell, for pages that already provide one.
#[component]
pub fn NotFoundContent() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
            <div class="relative">
                <h1 class="text-9xl font-black text-gray-100 dark:text-gray-800 select-none">
                    "404"
                </h1>
                <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-gray-900 dark:text-white whitespace-nowrap">
                    "Page not found"
                </p>
            </div>

            <div class="mt-4 space-y-6">
                <p class="text-gray-500 dark:text-gray-400 max-w-sm mx-auto">
                    "This page doesn't exist, or the portfolio you're looking for isn't published."
                </p>
                <A
                    href="/"
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-indigo-600 rounded-lg hover:bg-indigo-700 focus:ring-4 focus:outline-none focus:ring-indigo-300 dark:bg-indigo-500 dark:hover:bg-indigo-600 transition-all"
                >
                    <span class="material-symbols-outlined mr-2 text-base">"home"</span>
                    "Go Home"
                </A>
            </div>
        </div>
    }
}
