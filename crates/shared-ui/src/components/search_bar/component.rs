use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;

/// Filter row: a search box followed by any extra filter controls.
#[component]
pub fn SearchBar(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            span { class: "search-bar-icon",
                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
            }
            input {
                class: "search-bar-input",
                r#type: "search",
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_input.call(evt.value()),
            }
            {children}
        }
    }
}
