//! Shared UI for the TRIDENT portal.

use dioxus::prelude::*;

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{session_store, sign_in, sign_out, use_auth, AuthProvider, AuthState};

mod route_guard;
pub use route_guard::ProtectedRoute;

mod topbar;
pub use topbar::TopBar;

pub mod notifications;
pub use notifications::{
    badge_label, normalize_link, NotificationBell, NotificationDropdown, NotificationFeed,
};

pub const NOTIFICATIONS_CSS: Asset = asset!("/assets/notifications.css");
