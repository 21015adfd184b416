//! Backend origin selection.
//!
//! The environment decides which backend the client talks to: development
//! builds hit a local server, release builds always hit the deployed
//! backend (never the frontend origin, which would route API calls into the
//! SPA itself).

const DEV_BASE_URL: &str = "http://localhost:5000";
const PROD_BASE_URL: &str = "https://trident-backend-phi.vercel.app";

/// Backend origin for the current build environment.
pub fn api_base_url() -> &'static str {
    if cfg!(debug_assertions) {
        DEV_BASE_URL
    } else {
        PROD_BASE_URL
    }
}
