//! Samples table — client-side filter, sort, and pagination over the
//! server-rendered dataset, plus the per-row action buttons that open the
//! confirmation dialogs.

use std::sync::Arc;

use dioxus::prelude::*;

use labdash_core::modal::{ModalContext, ModalKind};
use labdash_core::table::{columns_for, ColumnField, SampleRow, SortDir, TableState, SEARCH_PLACEHOLDER};

use crate::state::{AppState, ModalStates};

#[component]
pub fn SamplesTable() -> Element {
    let state = use_context::<Arc<AppState>>();
    let mut table = use_signal(TableState::default);

    let columns = columns_for(state.config.template);
    let (view, sort, filter) = {
        let table_ref = table.read();
        (
            table_ref.view(&state.rows, columns),
            table_ref.sort,
            table_ref.filter.clone(),
        )
    };
    let page_count = view.page_count;
    let page_display = format!("{} / {}", view.page + 1, page_count.max(1));

    rsx! {
        section {
            class: "table-section",

            div {
                class: "table-toolbar",
                input {
                    class: "table-search",
                    r#type: "search",
                    placeholder: SEARCH_PLACEHOLDER,
                    value: "{filter}",
                    oninput: move |e: Event<FormData>| table.write().set_filter(&e.value()),
                }
            }

            table {
                id: "samples-table",
                class: "samples-table",
                thead {
                    tr {
                        for (i, col) in columns.iter().enumerate() {
                            th {
                                class: if col.orderable { "sortable" } else { "" },
                                onclick: move |_| table.write().toggle_sort(i, columns),
                                {col.label}
                                {match sort {
                                    Some((active, SortDir::Asc)) if active == i => rsx! {
                                        span { class: "sort-arrow", "\u{25B4}" }
                                    },
                                    Some((active, SortDir::Desc)) if active == i => rsx! {
                                        span { class: "sort-arrow", "\u{25BE}" }
                                    },
                                    _ => rsx! {},
                                }}
                            }
                        }
                    }
                }
                tbody {
                    if view.rows.is_empty() {
                        tr {
                            td {
                                class: "table-empty",
                                colspan: "{columns.len()}",
                                "No matching samples"
                            }
                        }
                    }
                    for row in view.rows.iter() {
                        tr {
                            key: "{row.pk}",
                            for col in columns.iter() {
                                if col.field == ColumnField::Actions {
                                    td {
                                        class: "actions-cell",
                                        RowActions { row: row.clone() }
                                    }
                                } else {
                                    td { {col.field.value(row).to_string()} }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "table-footer",
                span { class: "table-info", {view.info_line()} }
                div {
                    class: "table-pager",
                    button {
                        class: "pager-btn",
                        disabled: view.page == 0,
                        onclick: move |_| table.write().prev_page(),
                        "Previous"
                    }
                    span {
                        class: "pager-page",
                        "{page_display}"
                    }
                    button {
                        class: "pager-btn",
                        disabled: view.page + 1 >= page_count,
                        onclick: move |_| table.write().next_page(page_count),
                        "Next"
                    }
                }
            }
        }
    }
}

/// Action buttons for one row; each opens its dialog with a context rebuilt
/// from this row, so nothing carries over from a previous open.
#[component]
fn RowActions(row: SampleRow) -> Element {
    let modals = use_context::<ModalStates>();

    rsx! {
        for kind in ModalKind::ALL {
            button {
                class: "action-btn",
                onclick: {
                    let row = row.clone();
                    move |_| {
                        let mut dialog = modals.signal_for(kind);
                        dialog.write().open(ModalContext::from_row(kind, &row));
                    }
                },
                {kind.action_label()}
            }
        }
    }
}
