//! Skills editor: flat list with an inline add form and per-item delete.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Alert, AlertKind, Button, DashboardShell, Spinner};
use crate::features::auth::RequireUser;
use crate::features::portfolio::{client, types::SKILL_LEVELS};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use web_sys::{FormData, HtmlInputElement, HtmlSelectElement};

#[component]
pub fn DashboardSkillsPage() -> impl IntoView {
    view! {
        <RequireUser children=move || view! {
            <DashboardShell>
                <SkillsEditor />
            </DashboardShell>
        } />
    }
}

#[component]
fn SkillsEditor() -> impl IntoView {
    let skills = LocalResource::new(|| client::list_skills());

    let (name, set_name) = signal(String::new());
    let (level, set_level) = signal(SKILL_LEVELS[0].to_string());
    let icon = RwSignal::new_local(None::<web_sys::File>);
    let (error, set_error) = signal::<Option<AppError>>(None);

    let create_action = Action::new_local(move |form: &FormData| {
        let form = form.clone();
        async move { client::create_skill(form).await }
    });

    let delete_action = Action::new_local(move |id: &i64| {
        let id = *id;
        async move { client::delete_skill(id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(_) => {
                    set_name.set(String::new());
                    skills.refetch();
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(Ok(())) = delete_action.value().get() {
            skills.refetch();
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let name_value = name.get_untracked().trim().to_string();
        if name_value.is_empty() {
            set_error.set(Some(AppError::Config("Skill name is required.".to_string())));
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
        let _ = form.append_with_str("name", &name_value);
        let _ = form.append_with_str("level", &level.get_untracked());
        if let Some(file) = icon.get_untracked() {
            let _ = form.append_with_blob("icon_image", &file);
        }

        create_action.dispatch(form);
    };

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class=Theme::TITLE>"Skills"</h1>
                <p class=Theme::SUBTLE>"Tools and technologies you work with."</p>
            </div>

            <form class=format!("{} max-w-xl space-y-5", Theme::CARD) on:submit=on_submit>
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class=Theme::LABEL for="skill-name">"Name"</label>
                        <input
                            id="skill-name"
                            type="text"
                            class=Theme::INPUT
                            required
                            prop:value=move || name.get()
                            on:input=move |event| set_name.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="skill-level">"Level"</label>
                        <select
                            id="skill-level"
                            class=Theme::INPUT
                            on:change=move |event| {
                                set_level.set(event_target::<HtmlSelectElement>(&event).value());
                            }
                        >
                            {SKILL_LEVELS
                                .iter()
                                .map(|choice| {
                                    view! { <option value=*choice>{*choice}</option> }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <div>
                    <label class=Theme::LABEL for="skill-icon">"Icon (optional)"</label>
                    <input
                        id="skill-icon"
                        type="file"
                        accept="image/*"
                        class=Theme::INPUT
                        on:change=move |event| {
                            let input = event_target::<HtmlInputElement>(&event);
                            icon.set(input.files().and_then(|files| files.get(0)));
                        }
                    />
                </div>
                <Button button_type="submit" disabled=create_action.pending()>
                    "Add skill"
                </Button>
                {move || {
                    error
                        .get()
                        .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
                }}
            </form>

            <Suspense fallback=move || view! { <Spinner /> }.into_any()>
                {move || match skills.get() {
                    Some(Ok(items)) if items.is_empty() => {
                        view! { <p class=Theme::SUBTLE>"No skills yet."</p> }.into_any()
                    }
                    Some(Ok(items)) => view! {
                        <ul class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {items
                                .into_iter()
                                .map(|skill| {
                                    let id = skill.id;
                                    view! {
                                        <li class=format!("{} flex items-center justify-between", Theme::CARD)>
                                            <div>
                                                <p class="font-semibold text-gray-900 dark:text-white">
                                                    {skill.name.clone()}
                                                </p>
                                                <p class="text-sm text-gray-500">{skill.level.clone()}</p>
                                            </div>
                                            <button
                                                type="button"
                                                class=Theme::DANGER_LINK
                                                on:click=move |_| {
                                                    delete_action.dispatch(id);
                                                }
                                            >
                                                "Delete"
                                            </button>
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
