use dioxus::prelude::*;

use ui::AuthProvider;
use views::{
    Admin, Dashboard, Home, Login, Messages, NotFound, NotificationsPage, ProjectDetail, Register,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/messages")]
    Messages {},
    #[route("/notifications")]
    NotificationsPage {},
    #[route("/projects/:id")]
    ProjectDetail { id: i64 },
    #[route("/admin")]
    Admin {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::NOTIFICATIONS_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
