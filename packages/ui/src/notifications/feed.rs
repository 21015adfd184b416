use api::Notification;

/// Client-side snapshot of the notification inbox.
///
/// Holds the fetched list and the unread counter for the lifetime of a bell
/// session. The two come from separate endpoints and are reconciled only
/// through the transitions below; the counter is never recomputed by
/// counting the list, so the pair may drift between sync events. In
/// particular, deleting an unread notification leaves the counter alone
/// until the next unread-count fetch; that asymmetry is part of the
/// observable contract.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationFeed {
    pub notifications: Vec<Notification>,
    pub unread_count: u32,
}

impl NotificationFeed {
    /// Replace the list wholesale with a fresh fetch. Fetches are not
    /// merged; a new page fully supersedes the prior snapshot.
    pub fn apply_fetched(&mut self, notifications: Vec<Notification>) {
        self.notifications = notifications;
    }

    /// Accept a server-reported unread counter.
    pub fn apply_unread_count(&mut self, count: u32) {
        self.unread_count = count;
    }

    /// Mark one entry read. Decrements the counter only when the entry was
    /// present and unread; already-read or unknown ids are a no-op, so
    /// repeated calls cannot drive the counter below its true value.
    pub fn apply_marked_read(&mut self, id: i64) {
        let Some(entry) = self.notifications.iter_mut().find(|n| n.id == id) else {
            return;
        };
        if entry.is_read {
            return;
        }
        entry.is_read = true;
        self.unread_count = self.unread_count.saturating_sub(1);
    }

    /// Mark everything read and zero the counter.
    pub fn apply_marked_all_read(&mut self) {
        for entry in &mut self.notifications {
            entry.is_read = true;
        }
        self.unread_count = 0;
    }

    /// Remove one entry. The counter is untouched, even for unread
    /// entries, and converges on the next unread-count fetch.
    pub fn apply_deleted(&mut self, id: i64) {
        self.notifications.retain(|n| n.id != id);
    }

    /// Drop all cached state, e.g. when the session ends.
    pub fn clear(&mut self) {
        self.notifications.clear();
        self.unread_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: i64, is_read: bool) -> Notification {
        Notification {
            id,
            r#type: "message_received".to_string(),
            title: format!("Notification {id}"),
            message: "You have a new message".to_string(),
            link: Some("/messages".to_string()),
            is_read,
            created_at: "2026-05-01T12:30:00.000Z".to_string(),
            metadata: None,
        }
    }

    fn feed_with(notifications: Vec<Notification>, unread_count: u32) -> NotificationFeed {
        let mut feed = NotificationFeed::default();
        feed.apply_fetched(notifications);
        feed.apply_unread_count(unread_count);
        feed
    }

    #[test]
    fn test_fetch_replaces_wholesale() {
        let mut feed = feed_with(vec![notification(1, false), notification(2, true)], 1);

        feed.apply_fetched(vec![notification(3, false)]);

        assert_eq!(feed.notifications.len(), 1);
        assert_eq!(feed.notifications[0].id, 3);
        // The counter is not derived from the list.
        assert_eq!(feed.unread_count, 1);
    }

    #[test]
    fn test_marked_read_decrements_once() {
        let mut feed = feed_with(vec![notification(1, false)], 3);

        feed.apply_marked_read(1);
        assert!(feed.notifications[0].is_read);
        assert_eq!(feed.unread_count, 2);

        // Idempotent: repeated marks never decrement again.
        feed.apply_marked_read(1);
        feed.apply_marked_read(1);
        assert_eq!(feed.unread_count, 2);
    }

    #[test]
    fn test_marked_read_ignores_unknown_and_already_read() {
        let mut feed = feed_with(vec![notification(1, true)], 2);

        feed.apply_marked_read(1);
        feed.apply_marked_read(999);

        assert_eq!(feed.unread_count, 2);
    }

    #[test]
    fn test_marked_read_floors_at_zero() {
        let mut feed = feed_with(vec![notification(1, false)], 0);

        feed.apply_marked_read(1);

        assert_eq!(feed.unread_count, 0);
    }

    #[test]
    fn test_marked_all_read_zeroes_regardless_of_prior_state() {
        let mut feed = feed_with(
            vec![notification(1, false), notification(2, true), notification(3, false)],
            7,
        );

        feed.apply_marked_all_read();

        assert!(feed.notifications.iter().all(|n| n.is_read));
        assert_eq!(feed.unread_count, 0);

        // Also from an empty list.
        let mut empty = feed_with(vec![], 4);
        empty.apply_marked_all_read();
        assert_eq!(empty.unread_count, 0);
    }

    #[test]
    fn test_deleted_removes_exactly_one_entry() {
        let mut feed = feed_with(vec![notification(1, true), notification(2, false)], 1);

        feed.apply_deleted(1);

        assert_eq!(feed.notifications.len(), 1);
        assert_eq!(feed.notifications[0].id, 2);
        assert_eq!(feed.unread_count, 1);
    }

    #[test]
    fn test_deleting_unread_does_not_touch_counter() {
        // Deliberate decoupling: the counter converges on the next
        // unread-count fetch, not on delete.
        let mut feed = feed_with(vec![notification(1, false)], 1);

        feed.apply_deleted(1);

        assert!(feed.notifications.is_empty());
        assert_eq!(feed.unread_count, 1);
    }

    #[test]
    fn test_deleted_unknown_id_is_noop() {
        let mut feed = feed_with(vec![notification(1, false)], 1);

        feed.apply_deleted(42);

        assert_eq!(feed.notifications.len(), 1);
        assert_eq!(feed.unread_count, 1);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut feed = feed_with(vec![notification(1, false)], 5);

        feed.clear();

        assert!(feed.notifications.is_empty());
        assert_eq!(feed.unread_count, 0);
    }

    #[test]
    fn test_read_then_navigate_scenario() {
        // Bell shows 3, dropdown lists 3 unread, clicking the first marks
        // it read and decrements the badge to 2.
        let mut feed = feed_with(
            vec![notification(10, false), notification(11, false), notification(12, false)],
            3,
        );

        feed.apply_marked_read(10);

        assert_eq!(feed.unread_count, 2);
        assert!(feed.notifications[0].is_read);
        assert!(!feed.notifications[1].is_read);
        assert_eq!(
            crate::notifications::normalize_link(feed.notifications[0].link.as_deref()),
            "/messages"
        );
    }
}
