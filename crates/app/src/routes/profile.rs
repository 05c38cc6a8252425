use crate::auth::{use_api, use_auth};
use crate::format_helpers::format_date;
use client::DetailState;
use dioxus::prelude::*;
use shared_types::{Profile, Role};
use shared_ui::{
    Alert, Avatar, Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, PageHeader,
    PageTitle, Skeleton,
};

const PROFILE_FALLBACK: &str = "Failed to load profile. Please try again.";

/// The signed-in user's own account, from `GET /users/me`.
#[component]
pub fn ProfileScreen() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut profile = use_signal(DetailState::<Profile>::new);

    let load = use_callback(move |_: ()| {
        let api = api.clone();
        spawn(async move {
            let ticket = profile.write().begin_fetch();
            let result = client::api::auth::profile(&api)
                .await
                .map(Some)
                .map_err(|e| auth.request_error(&e, PROFILE_FALLBACK));
            profile.write().finish_fetch(ticket, result);
        });
    });

    use_effect(move || load.call(()));

    let state = profile.read();

    rsx! {
        div { class: "container profile",
            PageHeader {
                PageTitle { "Profile" }
            }

            if let Some(err) = state.error() {
                Alert { message: err.to_string(), on_retry: move |_| load.call(()) }
            }

            match state.record() {
                Some(user) => {
                    let role_label = Role::parse(&user.role)
                        .map(|r| r.label().to_string())
                        .unwrap_or_else(|| user.role.clone());
                    rsx! {
                        Card {
                            CardHeader {
                                div { class: "profile-heading",
                                    Avatar { name: user.name.clone(), large: true }
                                    div {
                                        CardTitle { "{user.name}" }
                                        Badge { variant: BadgeVariant::Info, "{role_label}" }
                                    }
                                }
                            }
                            CardContent {
                                dl { class: "detail-list",
                                    dt { "Email" }
                                    dd { "{user.email}" }
                                    dt { "Role" }
                                    dd { "{role_label}" }
                                    dt { "Member since" }
                                    dd { {format_date(user.created_at.as_deref())} }
                                }
                            }
                        }
                    }
                }
                None if state.is_loading() => rsx! {
                    Card {
                        CardContent {
                            Skeleton { style: "height: 4rem; width: 4rem; border-radius: 999px;" }
                            Skeleton { style: "height: 1.25rem; width: 40%; margin-top: 1rem;" }
                            Skeleton { style: "height: 1rem; width: 60%; margin-top: 0.5rem;" }
                        }
                    }
                },
                None => rsx! {},
            }
        }
    }
}
