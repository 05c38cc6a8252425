use crate::routes::Route;
use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "not-found",
            Card {
                CardHeader {
                    CardTitle { "Page not found" }
                }
                CardContent {
                    p { "Nothing lives at {path}." }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            navigator().push(Route::Dashboard {});
                        },
                        "Back to dashboard"
                    }
                }
            }
        }
    }
}
