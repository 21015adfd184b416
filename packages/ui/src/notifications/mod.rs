//! Notification inbox: bell, dropdown, and the read-state feed behind them.

mod feed;
pub use feed::NotificationFeed;

mod helpers;
pub use helpers::{
    badge_label, color_for_type, normalize_link, relative_time, truncate_message,
    NOTIFICATIONS_ROUTE,
};

mod bell;
pub use bell::NotificationBell;

mod dropdown;
pub use dropdown::NotificationDropdown;

mod item;
pub use item::NotificationItem;

mod empty_state;
pub use empty_state::NotificationEmptyState;
