//! Dismissible inline notice area for asynchronous failures.

use dioxus::prelude::*;

use crate::state::Notices;

/// Non-blocking notice stack; failed fetches land here instead of alert
/// boxes, and each notice can be dismissed on its own.
#[component]
pub fn NoticeStack() -> Element {
    let notices = use_context::<Notices>();
    let items = notices.items();

    if items.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "notice-stack",
            for notice in items {
                div {
                    key: "{notice.id}",
                    class: "notice",
                    span { class: "notice-text", {notice.message.clone()} }
                    button {
                        class: "notice-dismiss",
                        onclick: move |_| notices.dismiss(notice.id),
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}
