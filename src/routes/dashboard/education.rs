//! Education editor. Same JSON CRUD shape as experience, with years instead
//! of dates; an empty end year means the course is ongoing.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Alert, AlertKind, Button, ButtonVariant, DashboardShell, Spinner};
use crate::features::auth::RequireUser;
use crate::features::portfolio::{
    client,
    types::{Education, EducationPayload},
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn DashboardEducationPage() -> impl IntoView {
    view! {
        <RequireUser children=move || view! {
            <DashboardShell>
                <EducationEditor />
            </DashboardShell>
        } />
    }
}

#[component]
fn EducationEditor() -> impl IntoView {
    let entries = LocalResource::new(|| client::list_education());
    // Some(None) = creating, Some(Some(entry)) = editing, None = list only.
    let editing = RwSignal::new(None::<Option<Education>>);

    let delete_action = Action::new_local(move |id: &i64| {
        let id = *id;
        async move { client::delete_education(id).await }
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
                    <h1 class=Theme::TITLE>"Education"</h1>
                    <p class=Theme::SUBTLE>"Degrees and courses, newest first."</p>
                </div>
                <Button
                    disabled=Signal::derive(move || editing.get().is_some())
                    on_click=Callback::new(move |()| editing.set(Some(None)))
                >
                    "Add entry"
                </Button>
            </div>

            {move || {
                editing
                    .get()
                    .map(|entry| {
                        view! { <EducationForm entry=entry on_done=Callback::new(move |()| on_saved()) /> }
                    })
            }}

            <Suspense fallback=move || view! { <Spinner /> }.into_any()>
                {move || match entries.get() {
                    Some(Ok(items)) if items.is_empty() => {
                        view! { <p class=Theme::SUBTLE>"No education entries yet."</p> }.into_any()
                    }
                    Some(Ok(items)) => view! {
                        <ul class="space-y-4">
                            {items
                                .into_iter()
                                .map(|entry| {
                                    let id = entry.id;
                                    let edit_copy = entry.clone();
                                    let period = match entry.end_year {
                                        Some(end) => format!("{} - {}", entry.start_year, end),
                                        None => format!("{} - present", entry.start_year),
                                    };
                                    view! {
                                        <li class=Theme::CARD>
                                            <div class="flex items-start justify-between gap-4">
                                                <div>
                                                    <h2 class="font-semibold text-gray-900 dark:text-white">
                                                        {format!("{}, {}", entry.degree, entry.institution)}
                                                    </h2>
                                                    <p class="text-sm text-gray-500">{period}</p>
                                                    {entry
                                                        .description
                                                        .clone()
                                                        .map(|text| {
                                                            view! {
                                                                <p class="text-sm text-gray-500 mt-1">{text}</p>
                                                            }
                                                        })}
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
fn EducationForm(entry: Option<Education>, on_done: Callback<()>) -> impl IntoView {
    let record_id = entry.as_ref().map(|entry| entry.id);
    let initial = entry.unwrap_or_else(|| Education {
        id: 0,
        institution: String::new(),
        degree: String::new(),
        start_year: 0,
        end_year: None,
        description: None,
    });

    let (institution, set_institution) = signal(initial.institution);
    let (degree, set_degree) = signal(initial.degree);
    let (start_year, set_start_year) = signal(if initial.start_year > 0 {
        initial.start_year.to_string()
    } else {
        String::new()
    });
    let (end_year, set_end_year) = signal(
        initial
            .end_year
            .map(|year| year.to_string())
            .unwrap_or_default(),
    );
    let (description, set_description) = signal(initial.description.unwrap_or_default());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let save_action = Action::new_local(move |payload: &EducationPayload| {
        let payload = payload.clone();
        async move {
            match record_id {
                Some(id) => client::update_education(id, &payload).await,
                None => client::create_education(&payload).await,
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

        let institution_value = institution.get_untracked().trim().to_string();
        let degree_value = degree.get_untracked().trim().to_string();
        let start_value = start_year.get_untracked().trim().parse::<i32>().ok();
        if institution_value.is_empty() || degree_value.is_empty() || start_value.is_none() {
            set_error.set(Some(AppError::Config(
                "Institution, degree, and a numeric start year are required.".to_string(),
            )));
            return;
        }
        let start_value = start_value.unwrap_or_default();
        let end_value = end_year.get_untracked().trim().parse::<i32>().ok();

        save_action.dispatch(EducationPayload {
            institution: institution_value,
            degree: degree_value,
            start_year: start_value,
            end_year: end_value,
            description: description.get_untracked().trim().to_string(),
        });
    };

    view! {
        <form class=format!("{} max-w-xl space-y-5", Theme::CARD) on:submit=on_submit>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class=Theme::LABEL for="education-institution">"Institution"</label>
                    <input
                        id="education-institution"
                        type="text"
                        class=Theme::INPUT
                        required
                        prop:value=move || institution.get()
                        on:input=move |event| set_institution.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="education-degree">"Degree"</label>
                    <input
                        id="education-degree"
                        type="text"
                        class=Theme::INPUT
                        required
                        prop:value=move || degree.get()
                        on:input=move |event| set_degree.set(event_target_value(&event))
                    />
                </div>
            </div>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class=Theme::LABEL for="education-start">"Start year"</label>
                    <input
                        id="education-start"
                        type="number"
                        class=Theme::INPUT
                        required
                        prop:value=move || start_year.get()
                        on:input=move |event| set_start_year.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="education-end">"End year (blank if ongoing)"</label>
                    <input
                        id="education-end"
                        type="number"
                        class=Theme::INPUT
                        prop:value=move || end_year.get()
                        on:input=move |event| set_end_year.set(event_target_value(&event))
                    />
                </div>
            </div>
            <div>
                <label class=Theme::LABEL for="education-description">"Description"</label>
                <textarea
                    id="education-description"
                    class=Theme::INPUT
                    rows="3"
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
