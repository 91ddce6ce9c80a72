//! Root dashboard component — header with search, badge row, samples table,
//! and the dialog host.

use std::sync::Arc;

use dioxus::prelude::*;

use labdash_client::ApiClient;
use labdash_core::page::strip_fragment;

use crate::badges::BadgeRow;
use crate::modals::ModalHost;
use crate::notices::NoticeStack;
use crate::search::SearchPanel;
use crate::state::{AppState, ModalStates, Notices};
use crate::table::SamplesTable;
use crate::INITIAL_STATE;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        Arc::new(
            INITIAL_STATE
                .lock()
                .unwrap()
                .take()
                .expect("initial state loaded before launch"),
        )
    });
    use_context_provider(ApiClient::new);
    use_context_provider(ModalStates::new);
    use_context_provider(Notices::new);

    // Drop any #fragment carried over from a previous page so stale state
    // does not leak across navigations. History is replaced, not pushed.
    use_future(|| async {
        match document::eval("return window.location.href;").await {
            Ok(value) => {
                if let Some(href) = value.as_str() {
                    if let Some(clean) = strip_fragment(href) {
                        let script =
                            format!("window.history.replaceState({{}}, document.title, {clean:?});");
                        let _ = document::eval(&script).await;
                    }
                }
            }
            Err(e) => tracing::debug!("could not read location: {e:?}"),
        }
    });

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "dashboard-shell",

            header {
                class: "dashboard-header",
                h1 { class: "dashboard-title", "Sample tracking" }
                SearchPanel {}
            }

            NoticeStack {}
            BadgeRow {}

            main {
                class: "dashboard-content",
                SamplesTable {}
            }

            ModalHost {}
        }
    }
}
