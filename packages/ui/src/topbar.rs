//! Top navigation bar with the notification bell and session controls.

use dioxus::prelude::*;

use crate::auth::{sign_out, use_auth};
use crate::notifications::NotificationBell;

#[component]
pub fn TopBar() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();

    rsx! {
        header {
            class: "topbar",
            Link { to: "/", class: "topbar-brand", "TRIDENT" }

            nav {
                class: "topbar-nav",
                aria_label: "Main navigation",
                Link { to: "/", class: "topbar-link", "Home" }
                if state.is_authenticated() {
                    Link { to: "/dashboard", class: "topbar-link", "Dashboard" }
                    Link { to: "/messages", class: "topbar-link", "Messages" }
                }
            }

            div {
                class: "topbar-actions",
                if let Some(user) = state.user() {
                    NotificationBell {}
                    span { class: "topbar-user", "{user.display_name()}" }
                    button {
                        class: "topbar-logout",
                        onclick: move |_| {
                            sign_out(auth);
                            nav.replace("/");
                        },
                        "Log out"
                    }
                } else {
                    if !state.loading {
                        Link { to: "/login", class: "topbar-link", "Log in" }
                        Link { to: "/register", class: "topbar-link topbar-link--primary", "Sign up" }
                    }
                }
            }
        }
    }
}
