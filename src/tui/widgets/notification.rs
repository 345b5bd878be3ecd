//! Transient notifications
//!
//! Messages shown on the notification line that hide themselves once their
//! display duration has passed.

use std::time::{Duration, Instant};

use ratatui::style::Color;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl NotificationType {
    /// Get the color for this notification type
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    /// Get the icon/prefix for this notification type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }
}

/// A transient notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message
    pub message: String,
    /// Type of notification
    pub notification_type: NotificationType,
    /// Time when notification was created (for auto-dismiss)
    pub created_at: Instant,
    /// How long it stays visible
    pub duration: Duration,
}

impl Notification {
    /// Create a new notification
    pub fn new(
        message: impl Into<String>,
        notification_type: NotificationType,
        duration: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration,
        }
    }

    /// Whether the notification should be hidden at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}

/// The notifications currently on screen, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    /// Create a new notification queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification to the queue
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Remove notifications expired at `now`
    pub fn remove_expired_at(&mut self, now: Instant) {
        self.notifications.retain(|n| !n.is_expired_at(now));
    }

    /// Remove expired notifications
    pub fn remove_expired(&mut self) {
        self.remove_expired_at(Instant::now());
    }

    /// Active notifications, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// The most recent notification (if any)
    pub fn latest(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// Check if there are any notifications
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Get the number of notifications
    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIFETIME: Duration = Duration::from_millis(2500);

    #[test]
    fn test_notification_types() {
        assert_eq!(NotificationType::Success.color(), Color::Green);
        assert_eq!(NotificationType::Warning.color(), Color::Yellow);
        assert_eq!(NotificationType::Error.color(), Color::Red);
    }

    #[test]
    fn test_expiry() {
        let n = Notification::new("Saved", NotificationType::Success, LIFETIME);
        assert!(!n.is_expired_at(n.created_at));
        assert!(!n.is_expired_at(n.created_at + Duration::from_millis(2499)));
        assert!(n.is_expired_at(n.created_at + LIFETIME));
    }

    #[test]
    fn test_queue_drops_expired() {
        let mut queue = NotificationQueue::new();
        let first = Notification::new("First", NotificationType::Info, LIFETIME);
        let start = first.created_at;
        queue.push(first);
        queue.push(Notification::new(
            "Second",
            NotificationType::Warning,
            Duration::from_secs(60),
        ));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.latest().unwrap().message, "Second");

        queue.remove_expired_at(start + Duration::from_secs(3));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().unwrap().message, "Second");
    }
}
