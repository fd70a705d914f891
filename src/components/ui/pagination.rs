//! Pager for the admin user table: previous/next controls plus a page-size
//! selector.

use leptos::prelude::*;
use web_sys::HtmlSelectElement;

const PAGE_SIZES: &[usize] = &[10, 30, 50, 70, 100];

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page: Callback<usize>,
    on_page_size: Callback<usize>,
) -> impl IntoView {
    let nav_class = "px-3 py-1.5 text-sm rounded-lg border border-gray-300 text-gray-700 hover:bg-gray-100 disabled:opacity-50 disabled:cursor-not-allowed dark:border-gray-700 dark:text-gray-300 dark:hover:bg-gray-800";

    view! {
        <div class="flex flex-wrap items-center justify-between gap-4 mt-4">
            <div class="flex items-center gap-2">
                <button
                    type="button"
                    class=nav_class
                    disabled=move || page.get() <= 1
                    on:click=move |_| on_page.run(page.get().saturating_sub(1))
                >
                    "Previous"
                </button>
                <span class="text-sm text-gray-600 dark:text-gray-400">
                    {move || format!("Page {} of {}", page.get(), total_pages.get().max(1))}
                </span>
                <button
                    type="button"
                    class=nav_class
                    disabled=move || page.get() >= total_pages.get()
                    on:click=move |_| on_page.run(page.get() + 1)
                >
                    "Next"
                </button>
            </div>
            <label class="flex items-center gap-2 text-sm text-gray-600 dark:text-gray-400">
                "Per page"
                <select
                    class="rounded-lg border border-gray-300 bg-white px-2 py-1.5 text-sm dark:border-gray-700 dark:bg-gray-800 dark:text-gray-200"
                    on:change=move |ev| {
                        let value = event_target::<HtmlSelectElement>(&ev).value();
                        if let Ok(size) = value.parse() {
                            on_page_size.run(size);
                        }
                    }
                >
                    {PAGE_SIZES
                        .iter()
                        .map(|size| {
                            let size = *size;
                            view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {size.to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}
