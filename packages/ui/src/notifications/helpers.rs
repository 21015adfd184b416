//! Formatting and link handling for notification rendering.

/// Fallback navigation target for notifications without a usable link.
pub const NOTIFICATIONS_ROUTE: &str = "/notifications";

/// Badge text for the bell icon.
///
/// `None` when there is nothing unread (the badge is not rendered), the
/// literal count up to 99, `"99+"` beyond that.
pub fn badge_label(unread_count: u32) -> Option<String> {
    match unread_count {
        0 => None,
        count if count > 99 => Some("99+".to_string()),
        count => Some(count.to_string()),
    }
}

/// Normalize a notification link into an in-app path.
///
/// Absolute URLs are reduced to path + query + fragment so navigation stays
/// inside the single-page app regardless of which origin the backend put in
/// the link. Relative paths pass through untouched. A missing, empty, or
/// unparsable link falls back to [`NOTIFICATIONS_ROUTE`]; parse failures
/// are logged for diagnostics but never surface.
pub fn normalize_link(link: Option<&str>) -> String {
    let Some(link) = link.filter(|l| !l.is_empty()) else {
        return NOTIFICATIONS_ROUTE.to_string();
    };

    if link.starts_with('/') {
        return link.to_string();
    }

    match url::Url::parse(link) {
        Ok(parsed) => {
            let mut path = parsed.path().to_string();
            if let Some(query) = parsed.query() {
                path.push('?');
                path.push_str(query);
            }
            if let Some(fragment) = parsed.fragment() {
                path.push('#');
                path.push_str(fragment);
            }
            path
        }
        Err(err) => {
            tracing::error!("failed to parse notification link {link:?}: {err}");
            NOTIFICATIONS_ROUTE.to_string()
        }
    }
}

/// Format an ISO-8601 timestamp relative to `now_ms` (Unix epoch millis).
///
/// Matches the inbox display convention: "Just now" under a minute, then
/// minutes/hours/days, then the plain date once a week has passed. A
/// malformed timestamp degrades to its date portion rather than erroring.
pub fn relative_time(created_at: &str, now_ms: f64) -> String {
    let Ok(created) = chrono::DateTime::parse_from_rfc3339(created_at) else {
        return created_at.split('T').next().unwrap_or(created_at).to_string();
    };

    let diff_secs = ((now_ms - created.timestamp_millis() as f64) / 1000.0).floor() as i64;
    let diff_minutes = diff_secs / 60;
    let diff_hours = diff_minutes / 60;
    let diff_days = diff_hours / 24;

    if diff_secs < 60 {
        "Just now".to_string()
    } else if diff_minutes < 60 {
        format!("{diff_minutes} minute{} ago", plural(diff_minutes))
    } else if diff_hours < 24 {
        format!("{diff_hours} hour{} ago", plural(diff_hours))
    } else if diff_days < 7 {
        format!("{diff_days} day{} ago", plural(diff_days))
    } else {
        created.date_naive().to_string()
    }
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Accent color for a notification type tag.
pub fn color_for_type(r#type: &str) -> &'static str {
    if ["approved", "completed", "accepted"].iter().any(|t| r#type.contains(t)) {
        "#28a745"
    } else if ["rejected", "deleted", "overdue"].iter().any(|t| r#type.contains(t)) {
        "#dc3545"
    } else if ["approaching", "pending"].iter().any(|t| r#type.contains(t)) {
        "#ffc107"
    } else {
        "#007bff"
    }
}

/// Truncate a message for the dropdown, appending an ellipsis.
pub fn truncate_message(message: &str, max_len: usize) -> String {
    if message.chars().count() <= max_len {
        return message.to_string();
    }
    let truncated: String = message.chars().take(max_len).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_label_boundaries() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(1).as_deref(), Some("1"));
        assert_eq!(badge_label(5).as_deref(), Some("5"));
        assert_eq!(badge_label(99).as_deref(), Some("99"));
        assert_eq!(badge_label(100).as_deref(), Some("99+"));
    }

    #[test]
    fn test_normalize_link_rewrites_absolute_urls() {
        assert_eq!(
            normalize_link(Some("https://trident.org/projects/456")),
            "/projects/456"
        );
    }

    #[test]
    fn test_normalize_link_preserves_query_and_fragment() {
        assert_eq!(
            normalize_link(Some(
                "https://trident.org/projects/789/milestones?tab=upcoming#milestone-5"
            )),
            "/projects/789/milestones?tab=upcoming#milestone-5"
        );
    }

    #[test]
    fn test_normalize_link_passes_relative_paths_through() {
        assert_eq!(
            normalize_link(Some("/projects/123/applications")),
            "/projects/123/applications"
        );
    }

    #[test]
    fn test_normalize_link_falls_back_for_missing_links() {
        assert_eq!(normalize_link(None), NOTIFICATIONS_ROUTE);
        assert_eq!(normalize_link(Some("")), NOTIFICATIONS_ROUTE);
    }

    #[test]
    fn test_normalize_link_falls_back_for_malformed_urls() {
        // Must not panic, must fall back.
        assert_eq!(
            normalize_link(Some("ht!@#$%^&*()tp://invalid")),
            NOTIFICATIONS_ROUTE
        );
    }

    #[test]
    fn test_relative_time_buckets() {
        let now_ms = chrono::DateTime::parse_from_rfc3339("2026-05-08T12:00:00Z")
            .unwrap()
            .timestamp_millis() as f64;

        assert_eq!(relative_time("2026-05-08T11:59:30Z", now_ms), "Just now");
        assert_eq!(relative_time("2026-05-08T11:59:00Z", now_ms), "1 minute ago");
        assert_eq!(relative_time("2026-05-08T11:15:00Z", now_ms), "45 minutes ago");
        assert_eq!(relative_time("2026-05-08T10:00:00Z", now_ms), "2 hours ago");
        assert_eq!(relative_time("2026-05-05T12:00:00Z", now_ms), "3 days ago");
        assert_eq!(relative_time("2026-04-01T12:00:00Z", now_ms), "2026-04-01");
    }

    #[test]
    fn test_relative_time_degrades_on_malformed_timestamp() {
        assert_eq!(relative_time("not-a-date", 0.0), "not-a-date");
        assert_eq!(
            relative_time("2026-05-08Tgarbage", 0.0),
            "2026-05-08"
        );
    }

    #[test]
    fn test_truncate_message() {
        assert_eq!(truncate_message("short", 60), "short");
        assert_eq!(truncate_message("abcdef", 3), "abc...");
    }

    #[test]
    fn test_color_for_type_groups() {
        assert_eq!(color_for_type("project_approved"), "#28a745");
        assert_eq!(color_for_type("application_accepted"), "#28a745");
        assert_eq!(color_for_type("milestone_overdue"), "#dc3545");
        assert_eq!(color_for_type("milestone_deadline_approaching"), "#ffc107");
        assert_eq!(color_for_type("message_received"), "#007bff");
    }
}
