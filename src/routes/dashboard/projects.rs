//! Projects editor: list with delete, plus one form used for both create and
//! edit. The screenshot upload is optional on edit so text-only changes keep
//! the existing image.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Alert, AlertKind, Button, ButtonVariant, DashboardShell, Spinner};
use crate::features::auth::RequireUser;
use crate::features::portfolio::{client, types::Project};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use web_sys::{FormData, HtmlInputElement};

#[component]
pub fn DashboardProjectsPage() -> impl IntoView {
    view! {
        <RequireUser children=move || view! {
            <DashboardShell>
                <ProjectsEditor />
            </DashboardShell>
        } />
    }
}

#[component]
fn ProjectsEditor() -> impl IntoView {
    let projects = LocalResource::new(|| client::list_projects());
    // Some(None) = creating, Some(Some(project)) = editing, None = list only.
    let editing = RwSignal::new(None::<Option<Project>>);

    let delete_action = Action::new_local(move |id: &i64| {
        let id = *id;
        async move { client::delete_project(id).await }
    });

    Effect::new(move |_| {
        if let Some(Ok(())) = delete_action.value().get() {
            projects.refetch();
        }
    });

    let on_saved = move || {
        editing.set(None);
        projects.refetch();
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class=Theme::TITLE>"Projects"</h1>
                    <p class=Theme::SUBTLE>"Work you want on your page."</p>
                </div>
                <Button
                    disabled=Signal::derive(move || editing.get().is_some())
                    on_click=Callback::new(move |()| editing.set(Some(None)))
                >
                    "Add project"
                </Button>
            </div>

            {move || {
                editing
                    .get()
                    .map(|project| {
                        view! { <ProjectForm project=project on_done=Callback::new(move |()| on_saved()) /> }
                    })
            }}

            <Suspense fallback=move || view! { <Spinner /> }.into_any()>
                {move || match projects.get() {
                    Some(Ok(items)) if items.is_empty() => {
                        view! { <p class=Theme::SUBTLE>"No projects yet."</p> }.into_any()
                    }
                    Some(Ok(items)) => view! {
                        <ul class="space-y-4">
                            {items
                                .into_iter()
                                .map(|project| {
                                    let id = project.id;
                                    let edit_copy = project.clone();
                                    view! {
                                        <li class=Theme::CARD>
                                            <div class="flex items-start justify-between gap-4">
                                                <div>
                                                    <h2 class="font-semibold text-gray-900 dark:text-white">
                                                        {project.title.clone()}
                                                    </h2>
                                                    <p class="text-sm text-gray-500 mt-1">
                                                        {project.description.clone()}
                                                    </p>
                                                </div>
                                                <div class="flex items-center gap-3 shrink-0">
                                                    <button
                                                        type="button"
                                                        class="text-sm font-medium text-indigo-600 hover:text-indigo-800 dark:text-indigo-400"
                                                        on:click=move |_| editing.set(Some(Some(edit_copy.clone())))
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        type="button"
                                                        class=Theme::DANGER_LINK
                                                        on:click=move |_| {
                                                            delete_action.dispatch(id);
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ProjectForm(project: Option<Project>, on_done: Callback<()>) -> impl IntoView {
    let record_id = project.as_ref().map(|project| project.id);
    let initial = project.unwrap_or_else(|| Project {
        id: 0,
        title: String::new(),
        description: String::new(),
        project_image: None,
        github_link: None,
        live_demo_link: None,
    });

    let (title, set_title) = signal(initial.title);
    let (description, set_description) = signal(initial.description);
    let (github_link, set_github_link) = signal(initial.github_link.unwrap_or_default());
    let (live_demo_link, set_live_demo_link) = signal(initial.live_demo_link.unwrap_or_default());
    let image = RwSignal::new_local(None::<web_sys::File>);
    let (error, set_error) = signal::<Option<AppError>>(None);

    let save_action = Action::new_local(move |form: &FormData| {
        let form = form.clone();
        async move {
            match record_id {
                Some(id) => client::update_project(id, form).await,
                None => client::create_project(form).await,
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => on_done.run(()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let title_value = title.get_untracked().trim().to_string();
        if title_value.is_empty() {
            set_error.set(Some(AppError::Config("Title is required.".to_string())));
            return;
        }

        let form = match FormData::new() {
            Ok(form) => form,
            Err(_) => {
                set_error.set(Some(AppError::Config(
                    "Could not prepare the upload.".to_string(),
                )));
                return;
            }
        };
        let _ = form.append_with_str("title", &title_value);
        let _ = form.append_with_str("description", description.get_untracked().trim());
        let _ = form.append_with_str("github_link", github_link.get_untracked().trim());
        let _ = form.append_with_str("live_demo_link", live_demo_link.get_untracked().trim());
        if let Some(file) = image.get_untracked() {
            let _ = form.append_with_blob("project_image", &file);
        }

        save_action.dispatch(form);
    };

    view! {
        <form class=format!("{} max-w-xl space-y-5", Theme::CARD) on:submit=on_submit>
            <div>
                <label class=Theme::LABEL for="project-title">"Title"</label>
                <input
                    id="project-title"
                    type="text"
                    class=Theme::INPUT
                    required
                    prop:value=move || title.get()
                    on:input=move |event| set_title.set(event_target_value(&event))
                />
            </div>
            <div>
                <label class=Theme::LABEL for="project-description">"Description"</label>
                <textarea
                    id="project-description"
                    class=Theme::INPUT
                    rows="4"
                    prop:value=move || description.get()
                    on:input=move |event| set_description.set(event_target_value(&event))
                ></textarea>
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class=Theme::LABEL for="project-github">"GitHub link"</label>
                    <input
                        id="project-github"
                        type="url"
                        class=Theme::INPUT
                        prop:value=move || github_link.get()
                        on:input=move |event| set_github_link.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="project-demo">"Live demo link"</label>
                    <input
                        id="project-demo"
                        type="url"
                        class=Theme::INPUT
                        prop:value=move || live_demo_link.get()
                        on:input=move |event| set_live_demo_link.set(event_target_value(&event))
                    />
                </div>
            </div>
            <div>
                <label class=Theme::LABEL for="project-image">"Screenshot"</label>
                <input
                    id="project-image"
                    type="file"
                    accept="image/*"
                    class=Theme::INPUT
                    on:change=move |event| {
                        let input = event_target::<HtmlInputElement>(&event);
                        image.set(input.files().and_then(|files| files.get(0)));
                    }
                />
            </div>
            <div class="flex items-center gap-4">
                <Button button_type="submit" disabled=save_action.pending()>
                    "Save"
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    on_click=Callback::new(move |()| on_done.run(()))
                >
                    "Cancel"
                </Button>
            </div>
            {move || {
                error
                    .get()
                    .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
            }}
        </form>
    }
}
