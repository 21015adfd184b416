use dioxus::prelude::*;
use store::Role;
use ui::{ProtectedRoute, TopBar};

/// Admin console, restricted to the admin role. Any other session is
/// redirected the same way as an unauthenticated visitor.
#[component]
pub fn Admin() -> Element {
    rsx! {
        ProtectedRoute {
            role: Some(Role::Admin),
            TopBar {}
            main {
                class: "page page-admin",
                h1 { "Administration" }
                p { "Account reviews and platform announcements." }
            }
        }
    }
}
