use crate::auth::{use_api, use_auth};
use crate::components::SheetMode;
use crate::format_helpers::{
    format_budget, format_date, format_progress, format_status, priority_badge, status_badge,
    MISSING,
};
use crate::routes::projects::form_sheet::ProjectFormSheet;
use crate::routes::Route;
use client::DetailState;
use dioxus::prelude::*;
use shared_types::{PermissionSet, Project, TeamMember, UserRecord};
use shared_ui::components::{
    Alert, Avatar, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, PageActions, PageHeader, PageSubtitle, PageTitle, SearchBar, Skeleton,
};

const LOAD_FALLBACK: &str = "Failed to load project details";
const ADD_MEMBER_FALLBACK: &str = "Failed to add team member";
const REMOVE_MEMBER_FALLBACK: &str = "Failed to remove team member";
const CANDIDATES_FALLBACK: &str = "Failed to load users";

/// The `:id` segment as a memo. The router reuses a mounted screen when only
/// the id changes, so anything keyed on it must follow the prop.
fn use_route_id(id: String) -> Memo<String> {
    use_memo(use_reactive((&id,), |(id,)| id))
}

#[component]
pub fn ProjectDetailScreen(id: String, permissions: PermissionSet) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut detail = use_signal(DetailState::<Project>::new);
    let mut editing = use_signal(|| false);
    let project_id = use_route_id(id);

    let load = use_callback(move |_: ()| {
        let api = api.clone();
        let id = project_id.peek().clone();
        spawn(async move {
            let ticket = detail.write().begin_fetch();
            let result = client::api::projects::get_project(&api, &id)
                .await
                .map(Some)
                .map_err(|e| auth.request_error(&e, LOAD_FALLBACK));
            detail.write().finish_fetch(ticket, result);
        });
    });

    // Subscribes to the id, so a reused screen refetches.
    use_effect(move || {
        project_id.read();
        load.call(());
    });

    let api_for_members = use_api();
    let change_membership = use_callback(move |change: MemberChange| {
        let key = change.busy_key();
        if !detail.write().begin_action(&key) {
            return;
        }
        let api = api_for_members.clone();
        let id = project_id.peek().clone();
        spawn(async move {
            let outcome = match &change {
                MemberChange::Add(user_id) => client::api::projects::add_member(&api, &id, user_id)
                    .await
                    .map_err(|e| auth.request_error(&e, ADD_MEMBER_FALLBACK)),
                MemberChange::Remove(member_id) => {
                    client::api::projects::remove_member(&api, &id, member_id)
                        .await
                        .map_err(|e| auth.request_error(&e, REMOVE_MEMBER_FALLBACK))
                }
            };
            detail.write().finish_action(&key, outcome);
            load.call(());
        });
    });

    let state = detail.read();

    rsx! {
        div { class: "container project-detail",
            div { class: "back-link",
                Link { to: Route::ProjectList {}, "\u{2190} Back to projects" }
            }

            if let Some(err) = state.error() {
                Alert { message: err.to_string(), on_retry: move |_| load.call(()) }
            }
            if let Some(err) = state.action_error() {
                Alert {
                    message: err.to_string(),
                    on_dismiss: move |_| detail.write().dismiss_action_error(),
                }
            }

            match state.record() {
                Some(project) => rsx! {
                    ProjectOverview {
                        project: project.clone(),
                        can_edit: permissions.can_edit_project,
                        on_edit: move |_| editing.set(true),
                    }
                    TeamPanel {
                        project: project.clone(),
                        manage: permissions.can_manage_members(),
                        busy: state.busy_keys(),
                        on_change: move |change: MemberChange| change_membership.call(change),
                    }
                    if editing() {
                        ProjectFormSheet {
                            mode: SheetMode::Edit(project.clone()),
                            on_close: move |_| editing.set(false),
                            on_saved: move |_| {
                                editing.set(false);
                                load.call(());
                            },
                        }
                    }
                },
                None if state.is_loading() => rsx! {
                    Card {
                        CardContent {
                            Skeleton { style: "height: 2rem; width: 50%;" }
                            Skeleton { style: "height: 1rem; width: 80%; margin-top: 1rem;" }
                            Skeleton { style: "height: 8rem; margin-top: 1rem;" }
                        }
                    }
                },
                None => rsx! {},
            }
        }
    }
}

/// A pending team change. Busy keys keep add and remove marks apart.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberChange {
    Add(String),
    Remove(String),
}

impl MemberChange {
    fn busy_key(&self) -> String {
        match self {
            MemberChange::Add(user_id) => format!("add:{user_id}"),
            MemberChange::Remove(member_id) => format!("remove:{member_id}"),
        }
    }
}

#[component]
fn ProjectOverview(project: Project, can_edit: bool, on_edit: EventHandler<()>) -> Element {
    let progress = format_progress(project.progress);
    let owner = project.owner_name().unwrap_or(MISSING).to_string();
    let description = project
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "No description provided.".to_string());

    rsx! {
        PageHeader {
            div {
                PageTitle { "{project.name}" }
                PageSubtitle {
                    Badge { variant: status_badge(&project.status), {format_status(&project.status)} }
                    Badge { variant: priority_badge(&project.priority), {format_status(&project.priority)} }
                }
            }
            PageActions {
                if can_edit {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_edit.call(()),
                        "Edit Project"
                    }
                }
            }
        }

        div { class: "detail-grid",
            Card {
                CardHeader { CardTitle { "Overview" } }
                CardContent {
                    p { class: "detail-description", "{description}" }
                    div { class: "progress",
                        div { class: "progress-track",
                            div { class: "progress-fill", style: "width: {progress}%;" }
                        }
                        span { class: "progress-value", "{progress}%" }
                    }
                }
            }
            Card {
                CardHeader { CardTitle { "Details" } }
                CardContent {
                    dl { class: "detail-list",
                        dt { "Owner" }
                        dd { "{owner}" }
                        dt { "Budget" }
                        dd { {format_budget(project.budget)} }
                        dt { "Start Date" }
                        dd { {format_date(project.start_date.as_deref())} }
                        dt { "End Date" }
                        dd { {format_date(project.end_or_due_date())} }
                    }
                }
            }
            Card {
                CardHeader { CardTitle { "Technologies" } }
                CardContent {
                    if project.technologies.is_empty() {
                        p { class: "field-hint", "No technologies listed." }
                    } else {
                        div { class: "tag-list",
                            for tech in project.technologies.iter() {
                                Badge { key: "{tech}", variant: BadgeVariant::Outline, "{tech}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TeamPanel(
    project: Project,
    manage: bool,
    busy: Vec<String>,
    on_change: EventHandler<MemberChange>,
) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut adding = use_signal(|| false);
    let mut search = use_signal(String::new);
    let mut expanded = use_signal(|| true);

    // Only admins can pick new members, so only they load the directory.
    let candidates = use_resource(move || {
        let api = api.clone();
        async move {
            if !manage {
                return Ok(Vec::new());
            }
            client::api::users::member_candidates(&api)
                .await
                .map_err(|e| auth.request_error(&e, CANDIDATES_FALLBACK))
        }
    });

    let team: Vec<TeamMember> = project.team().to_vec();
    let count = project.member_count();
    let term = search();
    let (available, candidates_error): (Vec<UserRecord>, Option<String>) =
        match &*candidates.read() {
            Some(Ok(users)) => (
                users
                    .iter()
                    .filter(|u| !project.has_member(u.id()) && u.matches_search(&term))
                    .cloned()
                    .collect(),
                None,
            ),
            Some(Err(message)) => (Vec::new(), Some(message.clone())),
            None => (Vec::new(), None),
        };

    rsx! {
        Card {
            CardHeader {
                div { class: "team-header",
                    button {
                        class: "team-toggle",
                        r#type: "button",
                        onclick: move |_| expanded.set(!expanded()),
                        CardTitle { "Team Members ({count})" }
                    }
                    if manage {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| adding.set(!adding()),
                            if adding() { "Close" } else { "Add Member" }
                        }
                    }
                }
            }
            CardContent {
                if manage && adding() {
                    div { class: "member-add",
                        SearchBar {
                            value: term.clone(),
                            placeholder: "Search users...",
                            on_input: move |value: String| search.set(value),
                        }
                        if let Some(message) = candidates_error {
                            p { class: "field-error", "{message}" }
                        } else if available.is_empty() {
                            p { class: "field-hint", "No users available to add." }
                        }
                        ul { class: "member-add-list",
                            for user in available {
                                li { key: "{user.id()}", class: "member-add-item",
                                    Avatar { name: user.name.clone() }
                                    div { class: "member-text",
                                        span { class: "member-name", "{user.name}" }
                                        span { class: "member-email", "{user.email}" }
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        busy: busy.contains(&format!("add:{}", user.id())),
                                        onclick: {
                                            let user_id = user.id().to_string();
                                            move |_| on_change.call(MemberChange::Add(user_id.clone()))
                                        },
                                        "Add"
                                    }
                                }
                            }
                        }
                    }
                }

                if expanded() {
                    if team.is_empty() {
                        p { class: "field-hint", "No team members yet." }
                    }
                    ul { class: "member-list",
                        for (i, member) in team.into_iter().enumerate() {
                            {
                                let key = format!("{}-{i}", member.member_id().unwrap_or_default());
                                let removing = member
                                    .member_id()
                                    .is_some_and(|id| busy.contains(&format!("remove:{id}")));
                                rsx! {
                                    MemberItem {
                                        key: "{key}",
                                        member,
                                        manage,
                                        removing,
                                        on_remove: move |member_id: String| {
                                            on_change.call(MemberChange::Remove(member_id))
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MemberItem(
    member: TeamMember,
    manage: bool,
    removing: bool,
    on_remove: EventHandler<String>,
) -> Element {
    let name = member.display_name().to_string();
    let email = member.display_email().unwrap_or_default().to_string();
    let member_id = member.member_id().map(str::to_string);
    let mut confirming = use_signal(|| false);

    rsx! {
        li { class: "member-item",
            Avatar { name: name.clone() }
            div { class: "member-text",
                span { class: "member-name", "{name}" }
                if !email.is_empty() {
                    span { class: "member-email", "{email}" }
                }
            }
            if let Some(role) = member.project_role.clone() {
                Badge { variant: BadgeVariant::Neutral, "{role}" }
            }
            if manage {
                if let Some(id) = member_id {
                    if confirming() {
                        span { class: "member-confirm", "Remove?" }
                        Button {
                            variant: ButtonVariant::Destructive,
                            busy: removing,
                            disabled: removing,
                            onclick: move |_| {
                                confirming.set(false);
                                on_remove.call(id.clone());
                            },
                            "Yes"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| confirming.set(false),
                            "No"
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Ghost,
                            busy: removing,
                            disabled: removing,
                            onclick: move |_| confirming.set(true),
                            if removing { "Removing..." } else { "Remove" }
                        }
                    }
                }
            }
        }
    }
}
