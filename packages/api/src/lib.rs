//! # API crate: REST client for the TRIDENT backend
//!
//! Everything the frontend sends over the wire goes through this crate. It
//! owns backend origin resolution, the authenticated request gateway, and
//! the typed operations for each endpoint group.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend origin selection per build environment |
//! | [`client`] | [`ApiClient`]: URL building, JSON requests, bearer-token injection |
//! | [`error`] | [`ApiError`]: the error taxonomy surfaced to the UI |
//! | [`auth`] | Login and registration calls (unauthenticated) |
//! | [`notifications`] | Notification list / unread count / read-state / delete calls |
//!
//! Callers hold a token from the session store and pass it per call; the
//! gateway refuses to send an authenticated request without one.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod notifications;

pub use auth::{AuthResponse, RegisterRequest};
pub use client::ApiClient;
pub use config::api_base_url;
pub use error::ApiError;
pub use notifications::{
    Deleted, MarkAllRead, Notification, NotificationPage, NotificationQuery, UnreadCount,
};

pub use store::{Role, UserSummary};
