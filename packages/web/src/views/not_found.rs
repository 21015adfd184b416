use dioxus::prelude::*;
use ui::TopBar;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        TopBar {}
        main {
            class: "page page-not-found",
            h1 { "Page not found" }
            p { "There is nothing at \"/{path}\"." }
            Link { to: "/", "Back to the home page" }
        }
    }
}
