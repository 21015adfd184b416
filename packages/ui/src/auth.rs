//! Authentication context and hooks for the UI.
//!
//! The session lives in one `Signal<AuthState>` provided at the app root.
//! There is a single writer, [`sign_in`] and [`sign_out`], and any number
//! of readers through [`use_auth`]; both writers persist through the
//! platform [`store::SessionStore`] before publishing, so consumers observe
//! the update synchronously and a reload restores the same state.

use dioxus::prelude::*;
use store::{Session, SessionStore, UserSummary};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Session,
    /// True until the persisted session has been restored. Route guards
    /// hold their fire while this is set to avoid a flash-redirect.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: Session::default(),
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn user(&self) -> Option<&UserSummary> {
        self.session.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Session store backed by the platform-appropriate storage:
/// localStorage on the web, a process-wide in-memory store elsewhere.
pub fn session_store() -> SessionStore<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;
        static STORE: OnceLock<store::MemoryStore> = OnceLock::new();
        SessionStore::new(STORE.get_or_init(store::MemoryStore::new).clone())
    }
}

/// Persist a fresh login and publish it to every [`use_auth`] consumer.
pub fn sign_in(mut auth: Signal<AuthState>, user: UserSummary, token: String) {
    let session = session_store().login(user, token);
    auth.set(AuthState {
        session,
        loading: false,
    });
}

/// Clear the session, durably and in memory. Safe to call when already
/// logged out. Consumers keyed on the session (the notification bell, its
/// polling loop, guarded pages) unmount with this update, which drops their
/// in-flight tasks and cached notification state.
pub fn sign_out(mut auth: Signal<AuthState>) {
    session_store().logout();
    auth.set(AuthState {
        session: Session::default(),
        loading: false,
    });
}

/// Provider component that manages authentication state.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Restore the persisted session once on mount. Restore failures come
    // back as a logged-out session, never as an error.
    use_effect(move || {
        let session = session_store().restore();
        auth_state.set(AuthState {
            session,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
