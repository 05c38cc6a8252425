use dioxus::prelude::*;

/// Multi-line text input. Shares the validation layout of [`crate::Input`].
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_blur: Option<EventHandler<FocusEvent>>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = 4)] rows: u32,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            if !label.is_empty() {
                label { class: "textarea-label", "{label}" }
            }
            textarea {
                class: "textarea",
                value: value,
                rows: "{rows}",
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt),
                onblur: move |evt| {
                    if let Some(handler) = &on_blur {
                        handler.call(evt);
                    }
                },
            }
            if let Some(message) = error {
                p { class: "textarea-error", role: "alert", "{message}" }
            }
        }
    }
}
