use dioxus::prelude::*;

use crate::icons::FaBellSlash;
use crate::Icon;

/// Placeholder shown when the inbox has no notifications.
#[component]
pub fn NotificationEmptyState() -> Element {
    rsx! {
        div {
            class: "notification-empty",
            Icon { icon: FaBellSlash, width: 28, height: 28 }
            p { "No notifications yet" }
            span { "We'll let you know when something needs your attention." }
        }
    }
}
