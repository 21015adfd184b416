//! Public landing page.

use dioxus::prelude::*;
use ui::TopBar;

#[component]
pub fn Home() -> Element {
    rsx! {
        TopBar {}

        main {
            class: "page page-home",
            section {
                class: "hero",
                h1 { "Research partnerships that move missions forward" }
                p {
                    "TRIDENT matches nonprofits with researchers so evidence "
                    "and impact grow together."
                }
                div {
                    class: "hero-actions",
                    Link { to: "/register", class: "button button--primary", "Get started" }
                    Link { to: "/login", class: "button", "Log in" }
                }
            }

            section {
                class: "features",
                div {
                    class: "feature",
                    h3 { "For nonprofits" }
                    p { "Post projects and find research partners who fit your mission." }
                }
                div {
                    class: "feature",
                    h3 { "For researchers" }
                    p { "Browse live projects and apply your methods where they matter." }
                }
            }
        }
    }
}
