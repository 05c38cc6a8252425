use crate::auth::{use_api, use_auth};
use crate::format_helpers::format_status;
use crate::routes::Route;
use client::ScreenState;
use dioxus::prelude::*;
use shared_types::{PermissionSet, ProjectPriority, ProjectStatistics, ProjectStatus};
use shared_ui::{
    Alert, Card, CardContent, CardHeader, CardTitle, PageHeader, PageSubtitle, PageTitle, Skeleton,
    StatBar, StatCard,
};

const STATS_FALLBACK: &str = "Failed to load statistics";

#[component]
pub fn DashboardScreen(permissions: PermissionSet) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut stats = use_signal(ScreenState::<ProjectStatistics>::new);
    let mut user_count = use_signal(|| 0u64);
    let can_view_users = permissions.can_view_users;

    let load = use_callback(move |_: ()| {
        let api = api.clone();
        spawn(async move {
            let ticket = stats.write().begin_fetch();
            let result = client::api::projects::statistics(&api)
                .await
                .map_err(|e| auth.request_error(&e, STATS_FALLBACK));
            stats.write().finish_fetch(ticket, result);

            if can_view_users {
                let limit = client::load_config().page_size();
                let count = match client::api::users::count_users(&api, limit).await {
                    Ok(count) => count,
                    Err(e) => {
                        auth.request_error(&e, "");
                        0
                    }
                };
                user_count.set(count);
            }
        });
    });

    use_effect(move || load.call(()));

    let state = stats.read();
    let figures = *state.data();
    let first_load = state.is_loading() && figures == ProjectStatistics::default();
    let name = auth.user_name();

    rsx! {
        div { class: "container dashboard",
            PageHeader {
                div {
                    PageTitle { "Dashboard" }
                    PageSubtitle { "Welcome back, {name}" }
                }
            }

            if let Some(err) = state.error() {
                Alert { message: err.to_string(), on_retry: move |_| load.call(()) }
            }

            if first_load {
                div { class: "dashboard-stats",
                    for i in 0..4 {
                        Skeleton { key: "{i}", style: "height: 6rem;" }
                    }
                }
            } else {
                div { class: "dashboard-stats",
                    StatCard {
                        label: "Total Projects",
                        value: figures.total.to_string(),
                        onclick: move |_| {
                            navigator().push(Route::ProjectList {});
                        },
                    }
                    StatCard {
                        label: "In Progress",
                        value: figures.by_status.in_progress.to_string(),
                    }
                    StatCard {
                        label: "Completed",
                        value: figures.by_status.completed.to_string(),
                    }
                    if can_view_users {
                        StatCard {
                            label: "Users",
                            value: user_count().to_string(),
                            onclick: move |_| {
                                navigator().push(Route::UserList {});
                            },
                        }
                    }
                }
            }

            div { class: "dashboard-grid",
                Card {
                    CardHeader {
                        CardTitle { "Projects by Status" }
                    }
                    CardContent {
                        for status in ProjectStatus::ALL {
                            StatBar {
                                key: "{status.as_str()}",
                                label: format_status(status.as_str()),
                                count: figures.by_status.count(status),
                                total: figures.total,
                            }
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "Projects by Priority" }
                    }
                    CardContent {
                        for priority in ProjectPriority::ALL {
                            StatBar {
                                key: "{priority.as_str()}",
                                label: format_status(priority.as_str()),
                                count: figures.by_priority.count(priority),
                                total: figures.total,
                            }
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "Quick Links" }
                    }
                    CardContent {
                        nav { class: "quick-links",
                            Link { to: Route::ProjectList {}, class: "quick-link", "View all projects" }
                            if can_view_users {
                                Link { to: Route::UserList {}, class: "quick-link", "Manage users" }
                            }
                            Link { to: Route::Profile {}, class: "quick-link", "Your profile" }
                        }
                    }
                }
            }
        }
    }
}
