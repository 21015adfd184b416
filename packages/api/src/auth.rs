//! Login and registration calls.
//!
//! Both endpoints are unauthenticated; a successful response carries the
//! user record and the bearer token that seed the session store.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use store::{Role, UserSummary};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Payload for `POST /api/auth/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Successful login/register response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub user: UserSummary,
    pub token: String,
}

impl ApiClient {
    /// Exchange credentials for a session.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        self.request_json(Method::POST, "/auth/login", Some(&body))
            .await
    }

    /// Create an account; the backend signs the new user in directly.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.request_json(Method::POST, "/auth/register", Some(payload))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_decodes() {
        let raw = r#"{
            "user": {
                "id": 1,
                "name": "Test User",
                "email": "test@example.org",
                "role": "researcher"
            },
            "token": "test-token"
        }"#;
        let response: AuthResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.user.role, Role::Researcher);
        assert_eq!(response.token, "test-token");
    }

    #[test]
    fn test_register_request_serializes_role_lowercase() {
        let payload = RegisterRequest {
            name: "Org".to_string(),
            email: "org@example.org".to_string(),
            password: "secret123".to_string(),
            role: Role::Nonprofit,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["role"], "nonprofit");
    }
}
