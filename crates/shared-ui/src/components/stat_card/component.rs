use dioxus::prelude::*;

/// Dashboard figure: a label over a large number, optionally clickable.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] hint: String,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let clickable = onclick.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: if clickable { "stat-card clickable" } else { "stat-card" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            span { class: "stat-card-label", "{label}" }
            span { class: "stat-card-value", "{value}" }
            if !hint.is_empty() {
                span { class: "stat-card-hint", "{hint}" }
            }
        }
    }
}

/// Labelled horizontal bar showing `count` as a share of `total`.
#[component]
pub fn StatBar(label: String, count: u64, total: u64) -> Element {
    let percent = share_percent(count, total);

    rsx! {
        div { class: "stat-bar",
            div { class: "stat-bar-row",
                span { "{label}" }
                span { class: "stat-bar-count", "{count}" }
            }
            div { class: "stat-bar-track",
                div { class: "stat-bar-fill", style: "width: {percent}%;" }
            }
        }
    }
}

/// Whole-number percentage of `count` in `total`, 0 when `total` is 0.
pub fn share_percent(count: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    (count.min(total) * 100) / total
}
