use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertTone {
    #[default]
    Error,
    Info,
    Success,
}

impl AlertTone {
    fn class(&self) -> &'static str {
        match self {
            AlertTone::Error => "error",
            AlertTone::Info => "info",
            AlertTone::Success => "success",
        }
    }
}

/// Screen-level message banner with optional retry and dismiss affordances.
#[component]
pub fn Alert(
    message: String,
    #[props(default)] tone: AlertTone,
    #[props(default)] on_retry: Option<EventHandler<()>>,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "alert", "data-tone": tone.class(), role: "alert",
            span { class: "alert-message", "{message}" }
            div { class: "alert-actions",
                if let Some(retry) = on_retry {
                    button {
                        class: "alert-action",
                        r#type: "button",
                        onclick: move |_| retry.call(()),
                        "Retry"
                    }
                }
                if let Some(dismiss) = on_dismiss {
                    button {
                        class: "alert-dismiss",
                        r#type: "button",
                        "aria-label": "Dismiss",
                        onclick: move |_| dismiss.call(()),
                        "\u{2715}"
                    }
                }
            }
        }
    }
}
