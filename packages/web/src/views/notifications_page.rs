//! Full-page notification inbox.
//!
//! Also the fallback navigation target for notifications without a usable
//! link, so it must render something sensible for every session state the
//! guard lets through.

use api::{ApiClient, NotificationQuery};
use dioxus::prelude::*;
use ui::notifications::{NotificationEmptyState, NotificationItem};
use ui::{use_auth, NotificationFeed, ProtectedRoute, TopBar};

#[component]
pub fn NotificationsPage() -> Element {
    rsx! {
        ProtectedRoute {
            Inbox {}
        }
    }
}

const PAGE_SIZE: u32 = 50;

#[component]
fn Inbox() -> Element {
    let auth = use_auth();
    let mut feed = use_signal(NotificationFeed::default);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        let token = auth.peek().session.token.clone();
        let query = NotificationQuery {
            limit: PAGE_SIZE,
            ..NotificationQuery::default()
        };
        match ApiClient::default()
            .list_notifications(&query, token.as_deref())
            .await
        {
            Ok(page) => feed.write().apply_fetched(page.notifications),
            Err(err) => {
                tracing::error!("failed to fetch notification inbox: {err}");
                error.set(Some("Failed to load notifications".to_string()));
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

    rsx! {
        TopBar {}

        main {
            class: "page page-notifications",
            div {
                class: "page-notifications-header",
                h1 { "Notifications" }
                if !notifications.is_empty() {
                    button {
                        class: "button",
                        onclick: handle_mark_all,
                        "Mark All Read"
                    }
                }
            }

            if let Some(message) = error() {
                div { class: "form-error", role: "alert", "{message}" }
            } else {
                if notifications.is_empty() {
                    NotificationEmptyState {}
                }
                if !notifications.is_empty() {
                    div {
                        class: "notification-list notification-list--page",
                        for notification in notifications.iter() {
                            NotificationItem {
                                key: "{notification.id}",
                                notification: notification.clone(),
                                on_read: move |id| feed.write().apply_marked_read(id),
                                on_delete: move |id| feed.write().apply_deleted(id),
                                on_close: move |_| {},
                            }
                        }
                    }
                }
            }
        }
    }
}
