use dioxus::prelude::*;

/// Up to two uppercase initials from the first two words of `name`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Circular initials badge for a person.
#[component]
pub fn Avatar(name: String, #[props(default)] large: bool) -> Element {
    let letters = initials(&name);
    let letters = if letters.is_empty() { "?".to_string() } else { letters };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: if large { "avatar avatar-lg" } else { "avatar" },
            title: "{name}",
            "aria-hidden": "true",
            "{letters}"
        }
    }
}
