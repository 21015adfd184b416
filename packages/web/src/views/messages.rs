use dioxus::prelude::*;
use ui::{ProtectedRoute, TopBar};

/// Conversation inbox. A common navigation target for
/// `message_received` notifications.
#[component]
pub fn Messages() -> Element {
    rsx! {
        ProtectedRoute {
            TopBar {}
            main {
                class: "page page-messages",
                h1 { "Messages" }
                p { "Conversations with your project partners appear here." }
            }
        }
    }
}
