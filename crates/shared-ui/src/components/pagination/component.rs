use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// "Page 2 of 5 (42 total)".
pub fn page_summary(current_page: u32, total_pages: u32, total_count: u64) -> String {
    format!(
        "Page {} of {} ({} total)",
        current_page,
        total_pages.max(1),
        total_count
    )
}

/// Previous/Next controls. Emits the requested page number; the owner
/// decides whether it is a valid target.
#[component]
pub fn PaginationControls(
    current_page: u32,
    total_pages: u32,
    total_count: u64,
    #[props(default)] disabled: bool,
    on_navigate: EventHandler<u32>,
) -> Element {
    if total_pages <= 1 && current_page <= 1 {
        return rsx! {};
    }
    let summary = page_summary(current_page, total_pages, total_count);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            Button {
                variant: ButtonVariant::Outline,
                disabled: disabled || current_page <= 1,
                onclick: move |_| on_navigate.call(current_page.saturating_sub(1)),
                "Previous"
            }
            span { class: "pagination-info", "{summary}" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: disabled || current_page >= total_pages,
                onclick: move |_| on_navigate.call(current_page + 1),
                "Next"
            }
        }
    }
}
