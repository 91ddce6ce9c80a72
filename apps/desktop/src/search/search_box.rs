//! Autocomplete search box with idle-delay debounce.
//!
//! Keystrokes bump a generation counter; a delayed task only queries once
//! the idle window has passed with no newer keystroke, and its response is
//! dropped if a newer generation has started in the meantime.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;

use labdash_client::ApiClient;
use labdash_core::suggest::{sample_detail_url, should_search, DebounceGate, SuggestionItem};

use crate::state::{AppState, Notices};

#[component]
pub fn SearchBox() -> Element {
    let state = use_context::<Arc<AppState>>();
    let client = use_context::<ApiClient>();
    let notices = use_context::<Notices>();

    let mut query = use_signal(String::new);
    let mut gate = use_signal(DebounceGate::default);
    let mut suggestions = use_signal(Vec::<SuggestionItem>::new);
    let mut loading = use_signal(|| false);
    // one navigation per selection, even under a double click
    let mut navigated = use_signal(|| false);

    let search = state.config.search.clone();
    let spinner_enabled = search.spinner;

    let oninput = {
        let search = search.clone();
        move |e: Event<FormData>| {
            let value = e.value();
            query.set(value.clone());
            let generation = gate.write().bump();

            if !should_search(&value, search.min_query_len) {
                suggestions.write().clear();
                loading.set(false);
                return;
            }

            let client = client.clone();
            let endpoint = search.endpoint.clone();
            let idle_delay = search.idle_delay_ms;
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(idle_delay)).await;
                if !gate.read().is_current(generation) {
                    return;
                }

                loading.set(true);
                let outcome = client.suggestions(&endpoint, &value).await;

                // a newer keystroke supersedes this request; drop the response
                if !gate.read().is_current(generation) {
                    return;
                }
                loading.set(false);

                match outcome {
                    Ok(items) => suggestions.set(items),
                    Err(e) => {
                        tracing::warn!("worksheet search failed: {e}");
                        notices.push(format!("Worksheet search failed: {e}"));
                        suggestions.write().clear();
                    }
                }
            });
        }
    };

    let items = suggestions.read().clone();

    rsx! {
        div {
            class: "search-field",

            div {
                class: "search-input-row",
                input {
                    id: "ws_search",
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search worksheets, runs or samples...",
                    autocomplete: "off",
                    value: "{query}",
                    oninput: oninput,
                }
                if spinner_enabled && *loading.read() {
                    span {
                        id: "loading_spinner",
                        class: "search-spinner",
                        "Searching\u{2026}"
                    }
                }
            }

            if !items.is_empty() {
                ul {
                    class: "suggestion-list",
                    for item in items {
                        li {
                            class: "suggestion-item",
                            title: item.summary(),
                            // hovering previews the worksheet id without navigating
                            onmouseenter: {
                                let ws = item.ws.clone();
                                move |_| query.set(ws.clone())
                            },
                            onclick: {
                                let ws = item.ws.clone();
                                let sample_url = search.sample_url.clone();
                                move |_| {
                                    query.set(ws.clone());
                                    suggestions.write().clear();
                                    if *navigated.read() {
                                        return;
                                    }
                                    navigated.set(true);
                                    let target = sample_detail_url(&sample_url, &ws);
                                    tracing::info!("navigating to {target}");
                                    let script = format!("window.location.href = {target:?};");
                                    spawn(async move {
                                        let _ = document::eval(&script).await;
                                    });
                                }
                            },
                            div {
                                class: "suggestion-primary",
                                "Worksheet "
                                b { "{item.ws}" }
                            }
                            {item.sample.as_ref().map(|sample| rsx! {
                                div {
                                    class: "suggestion-detail",
                                    "- contains sample "
                                    b { "{sample}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
