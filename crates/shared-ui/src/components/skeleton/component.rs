use dioxus::prelude::*;

use dioxus_primitives::merge_attributes;

/// Animated loading placeholder. Size it through `style` or a class.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let merged = merge_attributes(vec![
        vec![Attribute::new("class", "skeleton", None, false)],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// A stack of skeleton rows standing in for a table.
#[component]
pub fn SkeletonRows(#[props(default = 5)] rows: usize) -> Element {
    rsx! {
        div { class: "skeleton-rows",
            for i in 0..rows {
                Skeleton { key: "{i}", style: "height: 2.5rem; width: 100%;" }
            }
        }
    }
}
