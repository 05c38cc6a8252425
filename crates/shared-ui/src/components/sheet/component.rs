use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;

/// Sliding side panel over a dimmed backdrop. Clicking the backdrop closes it.
#[component]
pub fn Sheet(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sheet-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "sheet-panel",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
pub fn SheetHeader(title: String, #[props(default)] description: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "sheet-header",
            div {
                h2 { class: "sheet-title", "{title}" }
                if !description.is_empty() {
                    p { class: "sheet-description", "{description}" }
                }
            }
            button {
                class: "sheet-close",
                r#type: "button",
                "aria-label": "Close",
                onclick: move |_| on_close.call(()),
                Icon::<LdX> { icon: LdX, width: 18, height: 18 }
            }
        }
    }
}

#[component]
pub fn SheetContent(children: Element) -> Element {
    rsx! {
        div { class: "sheet-content", {children} }
    }
}

#[component]
pub fn SheetFooter(children: Element) -> Element {
    rsx! {
        div { class: "sheet-footer", {children} }
    }
}
