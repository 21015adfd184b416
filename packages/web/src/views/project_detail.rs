use dioxus::prelude::*;
use ui::{ProtectedRoute, TopBar};

/// Project detail. Notifications about applications, milestones and status
/// changes link here.
#[component]
pub fn ProjectDetail(id: i64) -> Element {
    rsx! {
        ProtectedRoute {
            TopBar {}
            main {
                class: "page page-project",
                h1 { "Project #{id}" }
                p { "Project timeline, milestones and applications." }
            }
        }
    }
}
