pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod projects;
pub mod users;

use crate::auth::{use_api, use_auth};
use crate::permission_gate::{use_permissions, with_permissions, PermissionGate};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFolder, LdLayoutDashboard, LdLogOut, LdUser, LdUsers};
use dioxus_free_icons::Icon;
use shared_ui::{Avatar, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, Navbar};

use dashboard::DashboardScreen;
use login::Login;
use not_found::NotFound;
use profile::ProfileScreen;
use projects::{ProjectDetailScreen, ProjectListScreen};
use users::UserListScreen;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/profile")]
    Profile {},
    #[route("/projects")]
    ProjectList {},
    #[route("/projects/:id")]
    ProjectDetail { id: String },
    #[route("/users")]
    UserList {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Dashboard() -> Element {
    with_permissions(|permissions| rsx! { DashboardScreen { permissions } })
}

#[component]
fn Profile() -> Element {
    rsx! { ProfileScreen {} }
}

#[component]
fn ProjectList() -> Element {
    with_permissions(|permissions| rsx! { ProjectListScreen { permissions } })
}

#[component]
fn ProjectDetail(id: String) -> Element {
    with_permissions(|permissions| rsx! { ProjectDetailScreen { id, permissions } })
}

#[component]
fn UserList() -> Element {
    with_permissions(|permissions| {
        rsx! {
            PermissionGate {
                allowed: permissions.can_view_users,
                fallback: rsx! {
                    Card {
                        CardContent {
                            p { class: "gate-denied", "You do not have permission to view users." }
                        }
                    }
                },
                UserListScreen { permissions }
            }
        }
    })
}

/// Auth guard layout: redirects to the login screen without a live session.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();

    if auth.is_authenticated() {
        rsx! { Outlet::<Route> {} }
    } else {
        navigator().replace(Route::Login {});
        rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to login..." }
            }
        }
    }
}

/// Main app layout with the top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let api = use_api();
    let mut auth = use_auth();
    let permissions = use_permissions();
    let mut logging_out = use_signal(|| false);

    let session = auth.session.read().clone();
    let (user_name, role) = session
        .map(|s| (s.user_name, s.role))
        .unwrap_or_default();

    let handle_logout = move |_| {
        if logging_out() {
            return;
        }
        logging_out.set(true);
        let api = api.clone();
        spawn(async move {
            client::api::auth::logout(&api).await;
            auth.clear_session();
            logging_out.set(false);
            navigator().replace(Route::Login {});
        });
    };

    let nav_class = |active: bool| if active { "nav-link active" } else { "nav-link" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        Navbar {
            brand: rsx! {
                Link { to: Route::Dashboard {}, class: "brand",
                    Icon::<LdFolder> { icon: LdFolder, width: 22, height: 22 }
                    span { class: "brand-name", "ProjectHub" }
                }
            },
            links: rsx! {
                Link {
                    to: Route::Dashboard {},
                    class: nav_class(matches!(route, Route::Dashboard {})),
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                    "Dashboard"
                }
                Link {
                    to: Route::ProjectList {},
                    class: nav_class(matches!(route, Route::ProjectList {} | Route::ProjectDetail { .. })),
                    Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 }
                    "Projects"
                }
                if permissions.can_view_users {
                    Link {
                        to: Route::UserList {},
                        class: nav_class(matches!(route, Route::UserList {})),
                        Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                        "Users"
                    }
                }
            },
            actions: rsx! {
                Link { to: Route::Profile {}, class: "nav-account",
                    Avatar { name: user_name.clone() }
                    span { class: "nav-account-text",
                        span { class: "nav-account-name", "{user_name}" }
                        Badge { variant: BadgeVariant::Outline, "{role.label()}" }
                    }
                    Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    busy: logging_out(),
                    onclick: handle_logout,
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    if logging_out() { "Logging out..." } else { "Logout" }
                }
            },
        }

        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
