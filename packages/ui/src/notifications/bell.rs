//! Bell icon with unread badge and the dropdown toggle.

use std::time::Duration;

use api::ApiClient;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::icons::FaBell;
use crate::notifications::{badge_label, NotificationDropdown, NotificationFeed};
use crate::Icon;

/// Cadence of the background unread-count refresh.
const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Notification bell for the top bar.
///
/// Renders nothing without a session. While mounted it refreshes the unread
/// counter on login and every [`POLL_INTERVAL`] thereafter; the polling
/// task lives in this component's scope, so unmounting (e.g. logout) drops
/// it together with the cached feed.
#[component]
pub fn NotificationBell() -> Element {
    let auth = use_auth();
    let mut open = use_signal(|| false);
    let mut feed = use_signal(NotificationFeed::default);

    // Unread count on mount and whenever the session changes.
    let _ = use_resource(move || async move {
        let token = auth().session.token;
        let Some(token) = token else {
            feed.write().clear();
            return;
        };
        match ApiClient::default().unread_count(Some(&token)).await {
            Ok(count) => feed.write().apply_unread_count(count.unread_count),
            Err(err) => tracing::error!("failed to fetch unread count: {err}"),
        }
    });

    // Fixed-interval refresh for the lifetime of the bell. Each tick is an
    // independent fetch-and-apply; a slow response racing the next tick is
    // accepted last-write-wins.
    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(POLL_INTERVAL).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(POLL_INTERVAL).await;

                let Some(token) = auth.peek().session.token.clone() else {
                    continue;
                };
                match ApiClient::default().unread_count(Some(&token)).await {
                    Ok(count) => feed.write().apply_unread_count(count.unread_count),
                    Err(err) => tracing::error!("failed to refresh unread count: {err}"),
                }
            }
        });
    });

    // No session, no bell.
    if auth().session.user.is_none() {
        return rsx! {};
    }

    let unread = feed().unread_count;
    let aria_label = match unread {
        0 => "Notifications".to_string(),
        n => format!("Notifications, {n} unread"),
    };

    rsx! {
        div {
            class: "notification-bell",
            // Escape closes the open panel; a no-op while closed, so the
            // handler only has effect for the open state.
            onkeydown: move |evt: Event<KeyboardData>| {
                if open() && evt.key() == Key::Escape {
                    open.set(false);
                }
            },
            button {
                class: "notification-bell-button",
                aria_label: "{aria_label}",
                aria_haspopup: "true",
                aria_expanded: open(),
                onclick: move |_| {
                    let was_open = open();
                    open.set(!was_open);
                },
                Icon { icon: FaBell, width: 18, height: 18 }
                if let Some(label) = badge_label(unread) {
                    span { class: "notification-badge", "{label}" }
                }
            }

            if open() {
                NotificationDropdown {
                    feed,
                    on_close: move |_| open.set(false),
                }
            }
        }
    }
}
