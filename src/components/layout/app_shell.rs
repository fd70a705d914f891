//! Shared layout wrapper for public pages: header with session-aware
//! navigation and the content container. Navigation is client-side only; the
//! backend enforces access control on every request.

use crate::app_lib::build_info;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

/// Wraps routes with a header, main content container, and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let is_admin = Signal::derive(move || {
        auth.user
            .get()
            .map(|user| user.is_admin())
            .unwrap_or(false)
    });

    let navigate = use_navigate();
    let sign_out = move |_| {
        auth.sign_out();
        navigate("/", Default::default());
    };

    let link_class = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-indigo-600 md:p-0 dark:text-white md:dark:hover:text-indigo-400 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-800 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-2">
                        <span class="material-symbols-outlined text-indigo-600">"web"</span>
                        <span class="font-semibold whitespace-nowrap dark:text-white">"Folio"</span>
                    </A>
                    <nav>
                        <ul class="font-medium flex items-center space-x-6">
                            <Show
                                when=move || is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <A href="/login" {..} class=link_class>
                                                "Sign In"
                                            </A>
                                        </li>
                                        <li>
                                            <A href="/register" {..} class=link_class>
                                                "Sign Up"
                                            </A>
                                        </li>
                                    }
                                }
                            >
                                <li>
                                    <A
                                        href=move || {
                                            let target =
                                                if is_admin.get() { "/admin" } else { "/dashboard" };
                                            target.to_string()
                                        }
                                        {..}
                                        class=link_class
                                    >
                                        "Dashboard"
                                    </A>
                                </li>
                                <li>
                                    <button type="button" class=link_class on:click=sign_out.clone()>
                                        "Sign Out"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="border-t border-gray-100 dark:border-gray-800 py-4">
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    {format!("Folio {}", build_info::git_commit_hash())}
                </p>
            </footer>
        </div>
    }
}
