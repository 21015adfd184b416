//! Session-gated rendering for protected pages.

use dioxus::prelude::*;
use store::Role;

use crate::auth::{use_auth, AuthState};

/// Renders `children` only for an authenticated session, optionally
/// requiring a specific role.
///
/// While the persisted session is still being restored the guard holds a
/// neutral shell instead of redirecting, so reloading a protected page does
/// not bounce through the landing route before storage has been read.
/// Unauthenticated visitors, and authenticated users failing the role
/// check, are replaced onto the public landing route and never see the
/// children.
#[component]
pub fn ProtectedRoute(
    #[props(default)] role: Option<Role>,
    children: Element,
) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();

    if state.loading {
        return rsx! {
            div { class: "route-guard-loading", aria_busy: "true" }
        };
    }

    if !access_allowed(&state, role) {
        nav.replace("/");
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Whether a settled session may see a page with the given role requirement.
fn access_allowed(state: &AuthState, role: Option<Role>) -> bool {
    if !state.is_authenticated() {
        return false;
    }
    role.map_or(true, |required| {
        state.user().map(|user| user.role) == Some(required)
    })
}
