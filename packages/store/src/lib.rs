//! Durable client-side storage for the TRIDENT portal.
//!
//! The only state the client persists between page loads is the signed-in
//! session (user record + bearer token). This crate provides the key/value
//! storage abstraction that holds it, with a browser localStorage backend on
//! the web and an in-memory backend for tests and native development builds.

pub mod kv;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use kv::KeyValueStore;
pub use session::{Role, Session, SessionStore, UserSummary, TOKEN_KEY, USER_KEY};
