use dioxus::prelude::*;
use shared_ui::components::{Button, ButtonVariant};

/// Inline confirmation for a destructive action.
#[component]
pub fn ConfirmBar(
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "confirm-bar", role: "alertdialog",
            span { class: "confirm-bar-message", "{message}" }
            div { class: "confirm-bar-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
