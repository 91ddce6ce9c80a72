//! Status badges — one independent background fetch per configured endpoint.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;

use labdash_client::ApiClient;
use labdash_core::badge::{BadgeKind, BadgeSlot};

use crate::state::{AppState, Notices};

/// Row of configured badge boxes. Deployments may enable any subset; absent
/// endpoints render nothing and do not affect the others.
#[component]
pub fn BadgeRow() -> Element {
    let state = use_context::<Arc<AppState>>();
    let badges = state.config.enabled_badges();

    if badges.is_empty() {
        return rsx! {};
    }

    rsx! {
        section {
            class: "badge-row",
            for (kind, url) in badges {
                BadgeCard { kind, url }
            }
        }
    }
}

/// One badge box: fires its fetch on mount and resolves only its own slot,
/// so completion order across badges never matters.
#[component]
fn BadgeCard(kind: BadgeKind, url: String) -> Element {
    let state = use_context::<Arc<AppState>>();
    let client = use_context::<ApiClient>();
    let notices = use_context::<Notices>();
    let mut slot = use_signal(|| BadgeSlot::Loading);

    let reveal_delay = state.config.badges.reveal_delay_ms;
    use_future({
        let url = url.clone();
        move || {
            let client = client.clone();
            let url = url.clone();
            async move {
                match client.badge(&url).await {
                    Ok(payload) => {
                        // the reveal delay is cosmetic, carried over from the host pages
                        tokio::time::sleep(Duration::from_millis(reveal_delay)).await;
                        slot.set(BadgeSlot::Ready(payload));
                    }
                    Err(e) => {
                        tracing::warn!("badge fetch failed for {}: {e}", kind.label());
                        notices.push(format!("{} is unavailable: {e}", kind.label()));
                        slot.set(BadgeSlot::Unavailable);
                    }
                }
            }
        }
    });

    let slot_ref = slot.read();
    // the host markup defaults to warning styling until a payload lands
    let (count_text, badge_class, alert_class) = match &*slot_ref {
        BadgeSlot::Loading => (
            "\u{2026}".to_string(),
            "badge-warning".to_string(),
            "alert-warning".to_string(),
        ),
        BadgeSlot::Ready(payload) => (
            payload.count.to_string(),
            payload.css_class.badge_class(),
            payload.css_class.alert_class(),
        ),
        BadgeSlot::Unavailable => (
            "-".to_string(),
            "badge-secondary".to_string(),
            "alert-secondary".to_string(),
        ),
    };
    let unavailable = matches!(&*slot_ref, BadgeSlot::Unavailable);

    rsx! {
        div {
            id: kind.alert_id(),
            class: "alert {alert_class}",
            span { class: "badge-title", {kind.label()} }
            span {
                id: kind.text_id(),
                class: "badge {badge_class}",
                b { "{count_text}" }
            }
            if unavailable {
                span { class: "badge-error", "unavailable" }
            }
        }
    }
}
