use std::collections::BTreeMap;

use crate::auth::{use_api, use_auth};
use crate::components::SheetMode;
use crate::format_helpers::format_status;
use dioxus::prelude::*;
use shared_types::{Project, ProjectForm, ProjectPriority, ProjectStatus, UserRecord};
use shared_ui::components::{
    Alert, Button, ButtonVariant, FormSelect, Input, Sheet, SheetContent, SheetFooter,
    SheetHeader, Textarea,
};

const CREATE_FALLBACK: &str = "Failed to create project. Please try again.";
const UPDATE_FALLBACK: &str = "Failed to update project. Please try again.";

const CANDIDATES_FALLBACK: &str = "Failed to load users";

/// Create or edit a project. Validation runs locally before any request.
#[component]
pub fn ProjectFormSheet(
    mode: SheetMode<Project>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let initial = match &mode {
        SheetMode::Create => ProjectForm::default(),
        SheetMode::Edit(project) => ProjectForm::from_project(project),
    };
    let mut form = use_signal(move || initial);
    let mut errors = use_signal(BTreeMap::<String, String>::new);
    let mut submit_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let api_for_users = api.clone();
    let candidates = use_resource(move || {
        let api = api_for_users.clone();
        async move {
            client::api::users::member_candidates(&api)
                .await
                .map_err(|e| auth.request_error(&e, CANDIDATES_FALLBACK))
        }
    });

    let (title, description, submit_label) = if mode.is_edit() {
        ("Edit Project", "Update project information", "Update Project")
    } else {
        (
            "Create New Project",
            "Fill in the details to create a new project",
            "Create Project",
        )
    };

    let target = mode.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let current = form.read().clone();
        if let Err(e) = current.check() {
            errors.set(e.field_errors);
            return;
        }
        errors.set(BTreeMap::new());
        submit_error.set(None);
        saving.set(true);

        let request = current.to_request();
        let target = target.clone();
        let api = api.clone();
        spawn(async move {
            let result = match &target {
                SheetMode::Create => client::api::projects::create_project(&api, &request)
                    .await
                    .map_err(|e| auth.request_error(&e, CREATE_FALLBACK)),
                SheetMode::Edit(project) => {
                    client::api::projects::update_project(&api, project.id(), &request)
                        .await
                        .map_err(|e| auth.request_error(&e, UPDATE_FALLBACK))
                }
            };
            saving.set(false);
            match result {
                Ok(()) => on_saved.call(()),
                Err(message) => submit_error.set(Some(message)),
            }
        });
    };

    let field_error = move |key: &str| errors.read().get(key).cloned();
    let values = form.read().clone();

    rsx! {
        Sheet { open: true, on_close: move |_| on_close.call(()),
            SheetHeader { title, description, on_close: move |_| on_close.call(()) }
            form { class: "sheet-form", onsubmit: handle_submit, novalidate: true,
                SheetContent {
                    if let Some(err) = submit_error() {
                        Alert { message: err }
                    }
                    Input {
                        label: "Project Name",
                        placeholder: "Enter project name",
                        value: values.name.clone(),
                        error: field_error("name"),
                        on_input: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                    Textarea {
                        label: "Description",
                        placeholder: "Describe your project...",
                        value: values.description.clone(),
                        error: field_error("description"),
                        on_input: move |evt: FormEvent| form.write().description = evt.value(),
                    }
                    div { class: "form-row",
                        FormSelect {
                            label: "Status",
                            value: values.status.clone(),
                            error: field_error("status"),
                            onchange: move |evt: FormEvent| form.write().status = evt.value(),
                            option { value: "", "Select Status" }
                            for status in ProjectStatus::ALL {
                                option { value: status.as_str(), {format_status(status.as_str())} }
                            }
                        }
                        FormSelect {
                            label: "Priority",
                            value: values.priority.clone(),
                            error: field_error("priority"),
                            onchange: move |evt: FormEvent| form.write().priority = evt.value(),
                            option { value: "", "Select Priority" }
                            for priority in ProjectPriority::ALL {
                                option { value: priority.as_str(), {format_status(priority.as_str())} }
                            }
                        }
                    }
                    Input {
                        label: "Technologies",
                        placeholder: "React, Node.js, MongoDB...",
                        value: values.technologies.clone(),
                        on_input: move |evt: FormEvent| form.write().technologies = evt.value(),
                    }
                    Input {
                        label: "Budget",
                        input_type: "number",
                        placeholder: "Enter budget",
                        value: values.budget.clone(),
                        error: field_error("budget"),
                        on_input: move |evt: FormEvent| form.write().budget = evt.value(),
                    }
                    div { class: "form-row",
                        Input {
                            label: "Start Date",
                            input_type: "date",
                            value: values.start_date.clone(),
                            error: field_error("start_date"),
                            on_input: move |evt: FormEvent| form.write().start_date = evt.value(),
                        }
                        Input {
                            label: "End Date",
                            input_type: "date",
                            value: values.end_date.clone(),
                            error: field_error("end_date"),
                            on_input: move |evt: FormEvent| form.write().end_date = evt.value(),
                        }
                    }
                    fieldset { class: "member-picker",
                        legend { "Team Members" }
                        match &*candidates.read() {
                            Some(Ok(users)) => rsx! {
                                MemberChecklist {
                                    users: users.clone(),
                                    selected: values.team_members.clone(),
                                    on_toggle: move |user_id: String| {
                                        let mut draft = form.write();
                                        if let Some(pos) = draft.team_members.iter().position(|id| *id == user_id) {
                                            draft.team_members.remove(pos);
                                        } else {
                                            draft.team_members.push(user_id);
                                        }
                                    },
                                }
                            },
                            Some(Err(message)) => rsx! { p { class: "field-error", "{message}" } },
                            None => rsx! { p { class: "field-hint", "Loading users..." } },
                        }
                    }
                }
                SheetFooter {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        button_type: "submit",
                        busy: saving(),
                        disabled: saving(),
                        if saving() {
                            if mode.is_edit() { "Updating project..." } else { "Creating project..." }
                        } else {
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MemberChecklist(
    users: Vec<UserRecord>,
    selected: Vec<String>,
    on_toggle: EventHandler<String>,
) -> Element {
    if users.is_empty() {
        return rsx! {
            p { class: "field-hint", "No users available." }
        };
    }

    rsx! {
        div { class: "member-checklist",
            for user in users {
                label { key: "{user.id()}", class: "member-option",
                    input {
                        r#type: "checkbox",
                        checked: selected.iter().any(|s| s == user.id()),
                        onchange: {
                            let id = user.id().to_string();
                            move |_| on_toggle.call(id.clone())
                        },
                    }
                    span { class: "member-option-name", "{user.name}" }
                    span { class: "member-option-email", "{user.email}" }
                }
            }
        }
    }
}
