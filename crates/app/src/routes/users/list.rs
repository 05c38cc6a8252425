use crate::auth::{use_api, use_auth};
use crate::components::{ConfirmBar, SheetMode};
use client::ListState;
use dioxus::prelude::*;
use shared_types::{PermissionSet, Role, UserRecord};
use shared_ui::components::{
    Alert, Avatar, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
    FormSelect, PageActions, PageHeader, PageSubtitle, PageTitle, PaginationControls, SearchBar,
    SkeletonRows,
};

use super::form_sheet::UserFormSheet;

const FETCH_FALLBACK: &str = "Failed to fetch users. Please try again.";
const DELETE_FALLBACK: &str = "Failed to delete user. Please try again.";
const TOGGLE_FALLBACK: &str = "Failed to toggle user status. Please try again.";

/// A row-level mutation on the user table.
#[derive(Debug, Clone, Copy, PartialEq)]
enum UserAction {
    Delete,
    ToggleStatus,
}

/// Role filter: empty matches everything, otherwise a case-insensitive role match.
fn matches_role(user: &UserRecord, filter: &str) -> bool {
    filter.is_empty() || user.role.eq_ignore_ascii_case(filter)
}

fn role_badge(role: &str) -> BadgeVariant {
    match Role::parse(role) {
        Some(Role::SuperAdmin) => BadgeVariant::Danger,
        Some(Role::Admin) => BadgeVariant::Info,
        Some(Role::User) => BadgeVariant::Neutral,
        None => BadgeVariant::Outline,
    }
}

#[component]
pub fn UserListScreen(permissions: PermissionSet) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut list = use_signal(ListState::<UserRecord>::new);
    let mut search = use_signal(String::new);
    let mut role_filter = use_signal(String::new);
    let mut sheet = use_signal(|| Option::<SheetMode<UserRecord>>::None);
    let mut pending_delete = use_signal(|| Option::<UserRecord>::None);

    let load = use_callback(move |page: u32| {
        let api = api.clone();
        spawn(async move {
            let limit = client::load_config().page_size();
            let ticket = list.write().begin_fetch();
            let result = client::api::users::list_users(&api, page, limit)
                .await
                .map_err(|e| auth.request_error(&e, FETCH_FALLBACK));
            list.write().finish_fetch(ticket, result);
        });
    });

    use_effect(move || load.call(1));

    let refetch = move || load.call(list.peek().current_page());

    let api_for_actions = use_api();
    let run_action = use_callback(move |(action, id): (UserAction, String)| {
        if !list.write().begin_action(&id) {
            return;
        }
        let api = api_for_actions.clone();
        spawn(async move {
            let outcome = match action {
                UserAction::Delete => client::api::users::delete_user(&api, &id)
                    .await
                    .map_err(|e| auth.request_error(&e, DELETE_FALLBACK)),
                UserAction::ToggleStatus => client::api::users::toggle_user_status(&api, &id)
                    .await
                    .map_err(|e| auth.request_error(&e, TOGGLE_FALLBACK)),
            };
            list.write().finish_action(&id, outcome);
            refetch();
        });
    });

    let state = list.read();
    let pagination = state.pagination();
    let term = search();
    let filter = role_filter();
    let visible: Vec<UserRecord> = state
        .items()
        .iter()
        .filter(|u| u.matches_search(&term) && matches_role(u, &filter))
        .cloned()
        .collect();
    let first_load = state.is_loading() && state.items().is_empty();

    rsx! {
        div { class: "container users",
            PageHeader {
                div {
                    PageTitle { "Users" }
                    PageSubtitle { "{pagination.total_count} users" }
                }
                PageActions {
                    if permissions.can_manage_users() {
                        Button {
                            onclick: move |_| sheet.set(Some(SheetMode::Create)),
                            "Create User"
                        }
                    }
                }
            }

            SearchBar {
                value: term.clone(),
                placeholder: "Search by name or email...",
                on_input: move |value: String| search.set(value),
                FormSelect {
                    value: filter.clone(),
                    onchange: move |evt: FormEvent| role_filter.set(evt.value()),
                    option { value: "", "All Roles" }
                    for role in Role::ALL {
                        option { value: role.as_str(), "{role.label()}" }
                    }
                }
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
            if let Some(user) = pending_delete() {
                ConfirmBar {
                    message: format!("Are you sure you want to delete {}?", user.name),
                    on_cancel: move |_| pending_delete.set(None),
                    on_confirm: move |_| {
                        pending_delete.set(None);
                        run_action.call((UserAction::Delete, user.id().to_string()));
                    },
                }
            }

            if first_load {
                SkeletonRows { rows: 8 }
            } else {
                Card {
                    CardContent {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "User" }
                                DataTableColumn { "Email" }
                                DataTableColumn { "Role" }
                                DataTableColumn { "Status" }
                                DataTableColumn { align_end: true, "Actions" }
                            }
                            DataTableBody {
                                if visible.is_empty() {
                                    DataTableEmpty { colspan: 5,
                                        p { "No users found" }
                                        span { "Try adjusting your search or filter" }
                                    }
                                }
                                for user in visible {
                                    UserRow {
                                        key: "{user.id()}",
                                        busy: state.is_busy(user.id()),
                                        user: user.clone(),
                                        permissions,
                                        on_edit: move |u: UserRecord| sheet.set(Some(SheetMode::Edit(u))),
                                        on_delete: move |u: UserRecord| pending_delete.set(Some(u)),
                                        on_toggle: move |id: String| run_action.call((UserAction::ToggleStatus, id)),
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
                UserFormSheet {
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
fn UserRow(
    user: UserRecord,
    permissions: PermissionSet,
    busy: bool,
    on_edit: EventHandler<UserRecord>,
    on_delete: EventHandler<UserRecord>,
    on_toggle: EventHandler<String>,
) -> Element {
    let active = user.is_active();
    let role_label = Role::parse(&user.role)
        .map(|r| r.label().to_string())
        .unwrap_or_else(|| user.role.clone());
    let for_edit = user.clone();
    let for_delete = user.clone();
    let id = user.id().to_string();

    rsx! {
        DataTableRow { busy,
            DataTableCell {
                div { class: "user-cell",
                    Avatar { name: user.name.clone() }
                    span { class: "cell-strong", "{user.name}" }
                }
            }
            DataTableCell { "{user.email}" }
            DataTableCell {
                Badge { variant: role_badge(&user.role), "{role_label}" }
            }
            DataTableCell {
                if permissions.can_toggle_user_status {
                    label { class: "status-switch",
                        input {
                            r#type: "checkbox",
                            role: "switch",
                            checked: active,
                            disabled: busy,
                            onchange: move |_| on_toggle.call(id.clone()),
                        }
                        span { class: "status-switch-track" }
                        span { class: "status-switch-label",
                            if busy { "..." } else if active { "Active" } else { "Inactive" }
                        }
                    }
                } else {
                    Badge {
                        variant: if active { BadgeVariant::Success } else { BadgeVariant::Neutral },
                        if active { "Active" } else { "Inactive" }
                    }
                }
            }
            DataTableCell { align_end: true,
                div { class: "row-actions",
                    if permissions.can_manage_users() {
                        Button {
                            variant: ButtonVariant::Ghost,
                            disabled: busy,
                            onclick: move |_| on_edit.call(for_edit.clone()),
                            "Edit"
                        }
                    }
                    if permissions.can_delete_user {
                        Button {
                            variant: ButtonVariant::Destructive,
                            disabled: busy,
                            busy,
                            onclick: move |_| on_delete.call(for_delete.clone()),
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
