//! A single row in the notification dropdown.

use api::{ApiClient, Notification};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::icons::{
    FaBell, FaBullhorn, FaEnvelope, FaFileLines, FaFlag, FaFolderOpen, FaStar, FaUserCheck,
    FaXmark,
};
use crate::notifications::{color_for_type, normalize_link, relative_time, truncate_message};
use crate::Icon;

/// One notification row.
///
/// Opening an unread row applies the read-state change optimistically and
/// fires the server write best-effort; navigation and closing never wait
/// on it. The delete button swallows its click so it cannot double as an
/// open.
#[component]
pub fn NotificationItem(
    notification: Notification,
    on_read: EventHandler<i64>,
    on_delete: EventHandler<i64>,
    on_close: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let open_target = notification.clone();
    let open_item = use_callback(move |_: ()| {
        if !open_target.is_read {
            // Optimistic: the badge and row update now, the server write is
            // reconciled in the background and a failure only gets logged.
            on_read.call(open_target.id);
            let id = open_target.id;
            let token = auth.peek().session.token.clone();
            spawn(async move {
                if let Err(err) = ApiClient::default()
                    .mark_notification_read(id, token.as_deref())
                    .await
                {
                    tracing::error!("failed to mark notification {id} as read: {err}");
                }
            });
        }

        let target = normalize_link(open_target.link.as_deref());
        let _ = nav.push(target);
        on_close.call(());
    });

    let delete_id = notification.id;
    let handle_delete = move |evt: Event<MouseData>| {
        // Keep the click from reaching the row's open handler.
        evt.stop_propagation();
        let token = auth.peek().session.token.clone();
        spawn(async move {
            match ApiClient::default()
                .delete_notification(delete_id, token.as_deref())
                .await
            {
                Ok(_) => on_delete.call(delete_id),
                Err(err) => tracing::error!("failed to delete notification {delete_id}: {err}"),
            }
        });
    };

    let item_class = if notification.is_read {
        "notification-item"
    } else {
        "notification-item unread"
    };
    let color = color_for_type(&notification.r#type);
    let time_ago = relative_time(&notification.created_at, now_ms());

    rsx! {
        div {
            class: "{item_class}",
            role: "button",
            tabindex: "0",
            aria_label: "{notification.title}. {notification.message}",
            onclick: move |_| open_item.call(()),
            onkeydown: move |evt: Event<KeyboardData>| match evt.key() {
                Key::Enter => {
                    evt.prevent_default();
                    open_item.call(());
                }
                Key::Character(ref c) if c == " " => {
                    evt.prevent_default();
                    open_item.call(());
                }
                _ => {}
            },

            div {
                class: "notification-icon",
                style: "color: {color};",
                {type_icon(&notification.r#type)}
            }
            div {
                class: "notification-content",
                div { class: "notification-title", "{notification.title}" }
                div {
                    class: "notification-message",
                    "{truncate_message(&notification.message, 60)}"
                }
                div { class: "notification-time", "{time_ago}" }
            }
            button {
                class: "notification-delete",
                aria_label: "Delete notification",
                title: "Delete notification",
                onclick: handle_delete,
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}

/// Icon for a notification type tag, by tag family.
fn type_icon(tag: &str) -> Element {
    if tag.starts_with("project_") {
        rsx! { Icon { icon: FaFolderOpen, width: 16, height: 16 } }
    } else if tag.starts_with("milestone_") {
        rsx! { Icon { icon: FaFlag, width: 16, height: 16 } }
    } else if tag.starts_with("application_") {
        rsx! { Icon { icon: FaFileLines, width: 16, height: 16 } }
    } else if tag == "message_received" {
        rsx! { Icon { icon: FaEnvelope, width: 16, height: 16 } }
    } else if tag == "rating_received" {
        rsx! { Icon { icon: FaStar, width: 16, height: 16 } }
    } else if tag == "admin_message" || tag == "system_announcement" {
        rsx! { Icon { icon: FaBullhorn, width: 16, height: 16 } }
    } else if tag.starts_with("account_") {
        rsx! { Icon { icon: FaUserCheck, width: 16, height: 16 } }
    } else {
        rsx! { Icon { icon: FaBell, width: 16, height: 16 } }
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as f64)
        .unwrap_or(0.0)
}
