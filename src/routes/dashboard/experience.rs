//! Experience editor. Plain JSON payloads; an empty end date means the role
//! is current.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Alert, AlertKind, Button, ButtonVariant, DashboardShell, Spinner};
use crate::features::auth::RequireUser;
use crate::features::portfolio::{
    client,
    types::{Experience, ExperiencePayload},
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn DashboardExperiencePage() -> impl IntoView {
    view! {
        <RequireUser children=move || view! {
            <DashboardShell>
                <ExperienceEditor />
            </DashboardShell>
        } />
    }
}

#[component]
fn ExperienceEditor() -> impl IntoView {
    let entries = LocalResource::new(|| client::list_experience());
    // Some(None) = creating, Some(Some(entry)) = editing, None = list only.
    let editing = RwSignal::new(None::<Option<Experience>>);

    let delete_action = Action::new_local(move |id: &i64| {
        let id = *id;
        async move { client::delete_experience(id).await }
    });

    Effect::new(move |_| {
        if let Some(Ok(())) = delete_action.value().get() {
            entries.refetch();
        }
    });

    let on_saved = move || {
        editing.set(None);
        entries.refetch();
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class=Theme::TITLE>"Experience"</h1>
                    <p class=Theme::SUBTLE>"Roles you've held, newest first."</p>
                </div>
                <Button
                    disabled=Signal::derive(move || editing.get().is_some())
                    on_click=Callback::new(move |()| editing.set(Some(None)))
                >
                    "Add role"
                </Button>
            </div>

            {move || {
                editing
                    .get()
                    .map(|entry| {
                        view! { <ExperienceForm entry=entry on_done=Callback::new(move |()| on_saved()) /> }
                    })
            }}

            <Suspense fallback=move || view! { <Spinner /> }.into_any()>
                {move || match entries.get() {
                    Some(Ok(items)) if items.is_empty() => {
                        view! { <p class=Theme::SUBTLE>"No roles yet."</p> }.into_any()
                    }
                    Some(Ok(items)) => view! {
                        <ul class="space-y-4">
                            {items
                                .into_iter()
                                .map(|entry| {
                                    let id = entry.id;
                                    let edit_copy = entry.clone();
                                    let period = match &entry.end_date {
                                        Some(end) => format!("{} - {}", entry.start_date, end),
                                        None => format!("{} - present", entry.start_date),
                                    };
                                    view! {
                                        <li class=Theme::CARD>
                                            <div class="flex items-start justify-between gap-4">
                                                <div>
                                                    <h2 class="font-semibold text-gray-900 dark:text-white">
                                                        {format!("{} at {}", entry.role, entry.company)}
                                                    </h2>
                                                    <p class="text-sm text-gray-500">{period}</p>
                                                    <p class="text-sm text-gray-500 mt-1">
                                                        {entry.description.clone()}
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
fn ExperienceForm(entry: Option<Experience>, on_done: Callback<()>) -> impl IntoView {
    let record_id = entry.as_ref().map(|entry| entry.id);
    let initial = entry.unwrap_or_else(|| Experience {
        id: 0,
        role: String::new(),
        company: String::new(),
        start_date: String::new(),
        end_date: None,
        description: String::new(),
    });

    let (role, set_role) = signal(initial.role);
    let (company, set_company) = signal(initial.company);
    let (start_date, set_start_date) = signal(initial.start_date);
    let (end_date, set_end_date) = signal(initial.end_date.unwrap_or_default());
    let (description, set_description) = signal(initial.description);
    let (error, set_error) = signal::<Option<AppError>>(None);

    let save_action = Action::new_local(move |payload: &ExperiencePayload| {
        let payload = payload.clone();
        async move {
            match record_id {
                Some(id) => client::update_experience(id, &payload).await,
                None => client::create_experience(&payload).await,
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

        let role_value = role.get_untracked().trim().to_string();
        let company_value = company.get_untracked().trim().to_string();
        let start_value = start_date.get_untracked().trim().to_string();
        if role_value.is_empty() || company_value.is_empty() || start_value.is_empty() {
            set_error.set(Some(AppError::Config(
                "Role, company, and start date are required.".to_string(),
            )));
            return;
        }
        let end_value = end_date.get_untracked().trim().to_string();

        save_action.dispatch(ExperiencePayload {
            role: role_value,
            company: company_value,
            start_date: start_value,
            end_date: (!end_value.is_empty()).then_some(end_value),
            description: description.get_untracked().trim().to_string(),
        });
    };

    view! {
        <form class=format!("{} max-w-xl space-y-5", Theme::CARD) on:submit=on_submit>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class=Theme::LABEL for="experience-role">"Role"</label>
                    <input
                        id="experience-role"
                        type="text"
                        class=Theme::INPUT
                        required
                        prop:value=move || role.get()
                        on:input=move |event| set_role.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="experience-company">"Company"</label>
                    <input
                        id="experience-company"
                        type="text"
                        class=Theme::INPUT
                        required
                        prop:value=move || company.get()
                        on:input=move |event| set_company.set(event_target_value(&event))
                    />
                </div>
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class=Theme::LABEL for="experience-start">"Start date"</label>
                    <input
                        id="experience-start"
                        type="date"
                        class=Theme::INPUT
                        required
                        prop:value=move || start_date.get()
                        on:input=move |event| set_start_date.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="experience-end">"End date (blank if current)"</label>
                    <input
                        id="experience-end"
                        type="date"
                        class=Theme::INPUT
                        prop:value=move || end_date.get()
                        on:input=move |event| set_end_date.set(event_target_value(&event))
                    />
                </div>
            </div>
            <div>
                <label class=Theme::LABEL for="experience-description">"Description"</label>
                <textarea
                    id="experience-description"
                    class=Theme::INPUT
                    rows="4"
                    prop:value=move || description.get()
                    on:input=move |event| set_description.set(event_target_value(&event))
                ></textarea>
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
