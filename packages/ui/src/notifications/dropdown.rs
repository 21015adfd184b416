//! Dropdown panel listing the most recent notifications.

use api::{ApiClient, NotificationQuery};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::notifications::{NotificationEmptyState, NotificationFeed, NotificationItem};

/// Load state of the dropdown's list fetch.
#[derive(Clone, Debug, PartialEq)]
enum FetchState {
    Idle,
    Loading,
    Loaded,
    Errored(String),
}

/// The open notification panel.
///
/// Mounting the dropdown *is* opening it, so every open triggers a fresh
/// fetch of the first page. The invisible backdrop and the Escape handler
/// exist only while the panel is mounted; closing unhooks them, so no
/// dismissal listener can outlive the dropdown.
#[component]
pub fn NotificationDropdown(
    feed: Signal<NotificationFeed>,
    on_close: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let mut state = use_signal(|| FetchState::Idle);

    let _loader = use_resource(move || async move {
        state.set(FetchState::Loading);
        let token = auth.peek().session.token.clone();
        match ApiClient::default()
            .list_notifications(&NotificationQuery::default(), token.as_deref())
            .await
        {
            Ok(page) => {
                feed.write().apply_fetched(page.notifications);
                state.set(FetchState::Loaded);
            }
            Err(err) => {
                tracing::error!("failed to fetch notifications: {err}");
                state.set(FetchState::Errored("Failed to load notifications".to_string()));
            }
        }
    });

    let handle_mark_all = move |_| {
        let token = auth.peek().session.token.clone();
        spawn(async move {
            match ApiClient::default()
                .mark_all_notifications_read(token.as_deref())
                .await
            {
                Ok(_) => feed.write().apply_marked_all_read(),
                Err(err) => tracing::error!("failed to mark all notifications read: {err}"),
            }
        });
    };

    let notifications = feed().notifications;
    let loaded = state() == FetchState::Loaded;

    rsx! {
        div {
            class: "notification-backdrop",
            onclick: move |_| on_close.call(()),
        }
        div {
            class: "notification-dropdown",
            role: "dialog",
            aria_label: "Notifications",
            tabindex: "0",
            autofocus: true,
            onkeydown: move |evt: Event<KeyboardData>| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

            div {
                class: "notification-dropdown-header",
                h6 { "Notifications" }
                button {
                    class: "notification-dropdown-close",
                    aria_label: "Close notifications",
                    onclick: move |_| on_close.call(()),
                    "\u{00d7}"
                }
            }

            div {
                class: "notification-dropdown-body",
                {match state() {
                    FetchState::Idle | FetchState::Loading => rsx! {
                        div { class: "notification-loading", "Loading notifications..." }
                    },
                    FetchState::Errored(message) => rsx! {
                        div { class: "notification-error", role: "alert", "{message}" }
                    },
                    FetchState::Loaded if notifications.is_empty() => rsx! {
                        NotificationEmptyState {}
                    },
                    FetchState::Loaded => rsx! {
                        div {
                            class: "notification-list",
                            for notification in notifications.iter() {
                                NotificationItem {
                                    key: "{notification.id}",
                                    notification: notification.clone(),
                                    on_read: move |id| feed.write().apply_marked_read(id),
                                    on_delete: move |id| feed.write().apply_deleted(id),
                                    on_close: move |_| on_close.call(()),
                                }
                            }
                        }
                    },
                }}
            }

            if loaded && !notifications.is_empty() {
                div {
                    class: "notification-dropdown-footer",
                    button {
                        onclick: handle_mark_all,
                        "Mark All Read"
                    }
                    button {
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
