//! Worksheet search — autocomplete input with suggestion dropdown.

mod search_box;

use dioxus::prelude::*;
use search_box::SearchBox;

/// Search panel shown in the dashboard header.
#[component]
pub fn SearchPanel() -> Element {
    rsx! {
        div {
            class: "search-panel",
            SearchBox {}
        }
    }
}
