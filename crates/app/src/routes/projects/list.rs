use crate::auth::{use_api, use_auth};
use crate::components::{ConfirmBar, SheetMode};
use crate::format_helpers::{
    format_date, format_progress, format_status, priority_badge, status_badge, MISSING,
};
use crate::routes::projects::form_sheet::ProjectFormSheet;
use crate::routes::Route;
use client::ListState;
use dioxus::prelude::*;
use shared_types::{PermissionSet, Project};
use shared_ui::components::{
    Alert, Badge, Button, ButtonVariant, Card, CardContent, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, PageActions,
    PageHeader, PageSubtitle, PageTitle, PaginationControls, SearchBar, SkeletonRows,
};

const FETCH_FALLBACK: &str = "Failed to fetch projects. Please try again.";
const DELETE_FALLBACK: &str = "Failed to delete project. Please try again.";

#[component]
pub fn ProjectListScreen(permissions: PermissionSet) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut list = use_signal(ListState::<Project>::new);
    let mut search = use_signal(String::new);
    let mut sheet = use_signal(|| Option::<SheetMode<Project>>::None);
    let mut pending_delete = use_signal(|| Option::<(String, String)>::None);

    let load = use_callback(move |page: u32| {
        // The list is scoped to the signed-in user; wait until the id is known.
        let Some(user_id) = auth.user_id() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            let limit = client::load_config().page_size();
            let ticket = list.write().begin_fetch();
            let result = client::api::projects::list_projects(&api, page, limit, &user_id)
                .await
                .map_err(|e| auth.request_error(&e, FETCH_FALLBACK));
            list.write().finish_fetch(ticket, result);
        });
    });

    use_effect(move || load.call(1));

    let refetch = move || load.call(list.peek().current_page());

    let api_for_delete = use_api();
    let mut delete_project = move |id: String| {
        if !list.write().begin_action(&id) {
            return;
        }
        let api = api_for_delete.clone();
        spawn(async move {
            let outcome = client::api::projects::delete_project(&api, &id)
                .await
                .map_err(|e| auth.request_error(&e, DELETE_FALLBACK));
            list.write().finish_action(&id, outcome);
            refetch();
        });
    };

    let state = list.read();
    let pagination = state.pagination();
    let term = search();
    let visible: Vec<Project> = state
        .items()
        .iter()
        .filter(|p| p.matches_search(&term))
        .cloned()
        .collect();
    let show_actions = permissions.can_edit_project || permissions.can_delete_project;
    let colspan = if show_actions { 8 } else { 7 };
    let first_load = state.is_loading() && state.items().is_empty();

    rsx! {
        div { class: "container projects",
            PageHeader {
                div {
                    PageTitle { "Projects" }
                    PageSubtitle { "{pagination.total_count} projects" }
                }
                PageActions {
                    if permissions.can_create_project {
                        Button {
                            onclick: move |_| sheet.set(Some(SheetMode::Create)),
                            "New Project"
                        }
                    }
                }
            }

            SearchBar {
                value: term.clone(),
                placeholder: "Search projects...",
                on_input: move |value: String| search.set(value),
            }

            if let Some(err) = state.error() {
                Alert { message: err.to_string(), on_retry: move |_| refetch() }
            }
            if let Some(err) = state.action_error() {
                Alert {
                    message: err.to_string(),
                    on_dismiss: move |_| list.write().dismiss_action_error(),
                }
            }
            if let Some((id, name)) = pending_delete() {
                ConfirmBar {
                    message: format!("Are you sure you want to delete \"{name}\"?"),
                    on_cancel: move |_| pending_delete.set(None),
                    on_confirm: move |_| {
                        pending_delete.set(None);
                        delete_project(id.clone());
                    },
                }
            }

            if first_load {
                SkeletonRows { rows: 6 }
            } else {
                Card {
                    CardContent {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Name" }
                                DataTableColumn { "Status" }
                                DataTableColumn { "Priority" }
                                DataTableColumn { "Progress" }
                                DataTableColumn { "Owner" }
                                DataTableColumn { "Members" }
                                DataTableColumn { "Due" }
                                if show_actions {
                                    DataTableColumn { align_end: true, "Actions" }
                                }
                            }
                            DataTableBody {
                                if visible.is_empty() {
                                    DataTableEmpty { colspan,
                                        p { "No projects found" }
                                        span { "Try adjusting your search or create a new project" }
                                    }
                                }
                                for project in visible {
                                    ProjectRow {
                                        key: "{project.id()}",
                                        busy: state.is_busy(project.id()),
                                        project: project.clone(),
                                        permissions,
                                        on_edit: move |p: Project| sheet.set(Some(SheetMode::Edit(p))),
                                        on_delete: move |p: Project| {
                                            pending_delete.set(Some((p.id().to_string(), p.name.clone())));
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }

            PaginationControls {
                current_page: pagination.current_page,
                total_pages: pagination.total_pages,
                total_count: pagination.total_count,
                disabled: state.is_loading(),
                on_navigate: move |requested: u32| {
                    let target = list.peek().request_page(requested);
                    if let Some(page) = target {
                        load.call(page);
                    }
                },
            }

            if let Some(mode) = sheet() {
                ProjectFormSheet {
                    mode,
                    on_close: move |_| sheet.set(None),
                    on_saved: move |_| {
                        sheet.set(None);
                        refetch();
                    },
                }
            }
        }
    }
}

#[component]
fn ProjectRow(
    project: Project,
    permissions: PermissionSet,
    busy: bool,
    on_edit: EventHandler<Project>,
    on_delete: EventHandler<Project>,
) -> Element {
    let id = project.id().to_string();
    let progress = format_progress(project.progress);
    let owner = project.owner_name().unwrap_or(MISSING).to_string();
    let members = project.member_count();
    let due = format_date(project.end_or_due_date());
    let show_actions = permissions.can_edit_project || permissions.can_delete_project;
    let for_edit = project.clone();
    let for_delete = project.clone();

    rsx! {
        DataTableRow {
            busy,
            onclick: move |_| {
                navigator().push(Route::ProjectDetail { id: id.clone() });
            },
            DataTableCell { span { class: "cell-strong", "{project.name}" } }
            DataTableCell {
                Badge { variant: status_badge(&project.status), {format_status(&project.status)} }
            }
            DataTableCell {
                Badge { variant: priority_badge(&project.priority), {format_status(&project.priority)} }
            }
            DataTableCell {
                div { class: "progress",
                    div { class: "progress-track",
                        div { class: "progress-fill", style: "width: {progress}%;" }
                    }
                    span { class: "progress-value", "{progress}%" }
                }
            }
            DataTableCell { "{owner}" }
            DataTableCell { "{members}" }
            DataTableCell { "{due}" }
            if show_actions {
                DataTableCell { align_end: true,
                    div {
                        class: "row-actions",
                        onclick: move |evt| evt.stop_propagation(),
                        if permissions.can_edit_project {
                            Button {
                                variant: ButtonVariant::Ghost,
                                disabled: busy,
                                onclick: move |_| on_edit.call(for_edit.clone()),
                                "Edit"
                            }
                        }
                        if permissions.can_delete_project {
                            Button {
                                variant: ButtonVariant::Destructive,
                                disabled: busy,
                                busy,
                                onclick: move |_| on_delete.call(for_delete.clone()),
                                if busy { "Deleting..." } else { "Delete" }
                            }
                        }
                    }
                }
            }
        }
    }
}
