use dioxus::prelude::*;

/// Top application bar: brand on the left, links in the middle, account controls on the right.
#[component]
pub fn Navbar(brand: Element, links: Element, actions: Element) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "navbar",
            div { class: "navbar-brand", {brand} }
            button {
                class: "navbar-toggle",
                r#type: "button",
                "aria-label": "Toggle navigation",
                "aria-expanded": menu_open(),
                onclick: move |_| menu_open.set(!menu_open()),
                "\u{2630}"
            }
            nav {
                class: "navbar-links",
                "data-open": menu_open(),
                onclick: move |_| menu_open.set(false),
                {links}
            }
            div { class: "navbar-actions", {actions} }
        }
    }
}
