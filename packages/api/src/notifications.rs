//! # Notification endpoints
//!
//! Thin typed operations over the notification REST surface. Each call
//! delegates to the gateway with a fixed method and endpoint and propagates
//! [`ApiError`] unchanged; retries, if any, belong to the presentation
//! layer's polling loop, not here.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`ApiClient::list_notifications`] | `GET /api/notifications?limit&offset[&unread][&type]` |
//! | [`ApiClient::unread_count`] | `GET /api/notifications/unread-count` |
//! | [`ApiClient::mark_notification_read`] | `PUT /api/notifications/:id/read` |
//! | [`ApiClient::mark_all_notifications_read`] | `PUT /api/notifications/read-all` |
//! | [`ApiClient::delete_notification`] | `DELETE /api/notifications/:id` |

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;

/// A single notification owned by the current user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    /// Type tag, e.g. `"application_received"` or `"milestone_overdue"`.
    pub r#type: String,
    pub title: String,
    pub message: String,
    /// In-app navigation target; may be absent or an absolute URL.
    #[serde(default)]
    pub link: Option<String>,
    pub is_read: bool,
    /// ISO-8601 creation timestamp, kept as the wire string.
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Query parameters for [`ApiClient::list_notifications`].
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationQuery {
    pub limit: u32,
    pub offset: u32,
    /// Restrict to unread notifications.
    pub unread: Option<bool>,
    /// Restrict to a single type tag.
    pub r#type: Option<String>,
}

impl Default for NotificationQuery {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
            unread: None,
            r#type: None,
        }
    }
}

impl NotificationQuery {
    /// Render as a query string, always carrying limit and offset and the
    /// optional filters only when set.
    pub fn query_string(&self) -> String {
        let mut query = format!("?limit={}&offset={}", self.limit, self.offset);
        if let Some(unread) = self.unread {
            query.push_str(&format!("&unread={unread}"));
        }
        if let Some(tag) = &self.r#type {
            query.push_str(&format!("&type={tag}"));
        }
        query
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NotificationPage {
    pub notifications: Vec<Notification>,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCount {
    pub unread_count: u32,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAllRead {
    pub updated_count: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Deleted {
    pub message: String,
}

impl ApiClient {
    /// Fetch a page of the current user's notifications, newest first.
    pub async fn list_notifications(
        &self,
        query: &NotificationQuery,
        token: Option<&str>,
    ) -> Result<NotificationPage, ApiError> {
        let endpoint = format!("/notifications{}", query.query_string());
        self.request_json_with_auth(Method::GET, &endpoint, None::<&()>, token)
            .await
    }

    /// Fetch the unread counter. Served by its own endpoint, this is not
    /// derived from the list.
    pub async fn unread_count(&self, token: Option<&str>) -> Result<UnreadCount, ApiError> {
        self.request_json_with_auth(Method::GET, "/notifications/unread-count", None::<&()>, token)
            .await
    }

    /// Mark one notification read; returns the updated record.
    pub async fn mark_notification_read(
        &self,
        id: i64,
        token: Option<&str>,
    ) -> Result<Notification, ApiError> {
        let endpoint = format!("/notifications/{id}/read");
        self.request_json_with_auth(Method::PUT, &endpoint, None::<&()>, token)
            .await
    }

    /// Mark every notification read.
    pub async fn mark_all_notifications_read(
        &self,
        token: Option<&str>,
    ) -> Result<MarkAllRead, ApiError> {
        self.request_json_with_auth(Method::PUT, "/notifications/read-all", None::<&()>, token)
            .await
    }

    /// Delete one notification.
    pub async fn delete_notification(
        &self,
        id: i64,
        token: Option<&str>,
    ) -> Result<Deleted, ApiError> {
        let endpoint = format!("/notifications/{id}");
        self.request_json_with_auth(Method::DELETE, &endpoint, None::<&()>, token)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_defaults() {
        let query = NotificationQuery::default();
        assert_eq!(query.query_string(), "?limit=20&offset=0");
    }

    #[test]
    fn test_query_string_with_filters() {
        let query = NotificationQuery {
            limit: 10,
            offset: 30,
            unread: Some(true),
            r#type: Some("message_received".to_string()),
        };
        assert_eq!(
            query.query_string(),
            "?limit=10&offset=30&unread=true&type=message_received"
        );
    }

    #[test]
    fn test_notification_decodes_wire_shape() {
        let raw = r#"{
            "id": 42,
            "type": "application_received",
            "title": "New Application",
            "message": "You have a new application",
            "link": "/projects/123/applications",
            "is_read": false,
            "created_at": "2026-05-01T12:30:00.000Z",
            "metadata": {"project_id": 123}
        }"#;
        let n: Notification = serde_json::from_str(raw).unwrap();
        assert_eq!(n.id, 42);
        assert_eq!(n.r#type, "application_received");
        assert!(!n.is_read);
        assert_eq!(n.link.as_deref(), Some("/projects/123/applications"));
        assert!(n.metadata.is_some());
    }

    #[test]
    fn test_notification_tolerates_missing_optionals() {
        let raw = r#"{
            "id": 7,
            "type": "system_announcement",
            "title": "Maintenance",
            "message": "Scheduled downtime",
            "is_read": true,
            "created_at": "2026-05-01T12:30:00Z"
        }"#;
        let n: Notification = serde_json::from_str(raw).unwrap();
        assert!(n.link.is_none());
        assert!(n.metadata.is_none());
    }

    #[test]
    fn test_unread_count_uses_camel_case() {
        let count: UnreadCount = serde_json::from_str(r#"{"unreadCount": 3}"#).unwrap();
        assert_eq!(count.unread_count, 3);

        let updated: MarkAllRead = serde_json::from_str(r#"{"updatedCount": 5}"#).unwrap();
        assert_eq!(updated.updated_count, 5);
    }
}
