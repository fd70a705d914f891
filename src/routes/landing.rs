//! Public landing page.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center text-center py-20 space-y-6">
                <h1 class="text-4xl md:text-5xl font-bold text-gray-900 dark:text-white max-w-2xl">
                    "Your work, on your own page"
                </h1>
                <p class="text-lg text-gray-500 dark:text-gray-400 max-w-xl">
                    "Build a portfolio from your projects, skills, and experience, then share it at your own address."
                </p>
                <div class="flex items-center gap-4">
                    <A
                        href="/register"
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-indigo-600 rounded-lg hover:bg-indigo-700 focus:ring-4 focus:outline-none focus:ring-indigo-300 dark:bg-indigo-500 dark:hover:bg-indigo-600 transition-all"
                    >
                        "Get started"
                    </A>
                    <A
                        href="/login"
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700 transition-all"
                    >
                        "Sign in"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
