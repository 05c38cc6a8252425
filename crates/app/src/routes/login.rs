use crate::auth::{use_api, use_auth};
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdFolder;
use dioxus_free_icons::Icon;
use shared_ui::{
    Alert, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
};

const LOGIN_FALLBACK: &str = "Login failed. Please try again.";

/// Email/password sign-in. An existing session skips straight to the dashboard.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let (email_value, password_value) = (email().trim().to_string(), password());
        if email_value.is_empty() || password_value.is_empty() {
            error_msg.set(Some("Email and password are required".to_string()));
            return;
        }

        loading.set(true);
        error_msg.set(None);
        let api = api.clone();
        spawn(async move {
            match client::api::auth::login(&api, &email_value, &password_value).await {
                Ok(session) => {
                    auth.set_session(session);
                    navigator().replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "login rejected");
                    error_msg.set(Some(e.display_or(LOGIN_FALLBACK)));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            div { class: "login-branding",
                div { class: "login-brand-logo",
                    Icon::<LdFolder> { icon: LdFolder, width: 48, height: 48 }
                }
                h1 { "ProjectHub" }
                p { "Manage your projects efficiently with our powerful dashboard" }
                ul { class: "login-features",
                    li { "Track project progress" }
                    li { "Manage team members" }
                    li { "Real-time analytics" }
                }
            }

            div { class: "login-form-section",
                Card { class: "login-card",
                    CardHeader {
                        CardTitle { "Welcome Back" }
                        CardDescription { "Please sign in to your account" }
                    }
                    CardContent {
                        if let Some(err) = error_msg() {
                            Alert {
                                message: err,
                                on_dismiss: move |_| error_msg.set(None),
                            }
                        }

                        form { class: "login-form", onsubmit: handle_login,
                            Input {
                                label: "Email",
                                input_type: "email",
                                placeholder: "Enter your email",
                                required: true,
                                disabled: loading(),
                                value: email(),
                                on_input: move |evt: FormEvent| email.set(evt.value()),
                            }
                            div { class: "login-password",
                                Input {
                                    label: "Password",
                                    input_type: if show_password() { "text" } else { "password" },
                                    placeholder: "Enter your password",
                                    required: true,
                                    disabled: loading(),
                                    value: password(),
                                    on_input: move |evt: FormEvent| password.set(evt.value()),
                                }
                                button {
                                    class: "login-password-toggle",
                                    r#type: "button",
                                    onclick: move |_| show_password.set(!show_password()),
                                    if show_password() { "Hide" } else { "Show" }
                                }
                            }
                            Button {
                                button_type: "submit",
                                busy: loading(),
                                disabled: loading(),
                                if loading() { "Signing in..." } else { "Sign In" }
                            }
                        }
                    }
                }
            }
        }
    }
}
