//! Role-aware dashboard behind the session guard.

use dioxus::prelude::*;
use store::Role;
use ui::{use_auth, ProtectedRoute, TopBar};

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        ProtectedRoute {
            DashboardContent {}
        }
    }
}

#[component]
fn DashboardContent() -> Element {
    let auth = use_auth();
    let state = auth();
    let Some(user) = state.user() else {
        return rsx! {};
    };

    let headline = match user.role {
        Role::Nonprofit => "Your projects and research partners",
        Role::Researcher => "Projects matched to your expertise",
        Role::Admin => "Platform administration",
    };

    rsx! {
        TopBar {}

        main {
            class: "page page-dashboard",
            h1 { "Hi, {user.display_name()}" }
            p { class: "dashboard-headline", "{headline}" }

            if !user.is_profile_complete() {
                div {
                    class: "dashboard-hint",
                    "Complete your profile to unlock matching."
                }
            }

            section {
                class: "dashboard-panel",
                h2 { "Recent activity" }
                p {
                    "Everything that needs your attention lands in the "
                    Link { to: "/notifications", "notification inbox" }
                    "."
                }
            }
        }
    }
}
