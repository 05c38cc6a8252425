use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Wraps `DataTableColumn`s in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(#[props(default)] align_end: bool, children: Element) -> Element {
    rsx! {
        th { class: if align_end { "align-end" } else { "" }, {children} }
    }
}

/// Table row. Rows with a handler are clickable; `busy` dims the row
/// while a mutation on it is running.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)] busy: bool,
    children: Element,
) -> Element {
    let class = match (onclick.is_some(), busy) {
        (_, true) => "data-table-row busy",
        (true, false) => "data-table-row clickable",
        (false, false) => "data-table-row",
    };
    rsx! {
        tr {
            class,
            "aria-busy": busy,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(#[props(default)] align_end: bool, children: Element) -> Element {
    rsx! {
        td { class: if align_end { "align-end" } else { "" }, {children} }
    }
}

/// Full-width row for "no results" and similar messages.
#[component]
pub fn DataTableEmpty(colspan: u32, children: Element) -> Element {
    rsx! {
        tr {
            td { class: "data-table-empty", colspan: "{colspan}", {children} }
        }
    }
}
