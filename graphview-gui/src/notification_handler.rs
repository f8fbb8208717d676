use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotificationKind {
    Info,
    Warning,
}

/// Transient toast shown over the panel; warnings (oversized artifact,
/// fetch failure) keep their kind so the UI can tint them.
#[derive(Debug, Clone)]
pub(crate) struct Notification {
    pub(crate) kind: NotificationKind,
    pub(crate) title: String,
    pub(crate) message: String,
    pub(crate) created_at: Instant,
}

pub(crate) struct NotificationHandler {
    notifications: Vec<Notification>,
}

impl NotificationHandler {
    pub(crate) fn new() -> Self {
        Self {
            notifications: Vec::new(),
        }
    }

    fn push(&mut self, kind: NotificationKind, title: &str, message: &str) {
        self.notifications.push(Notification {
            kind,
            title: title.to_string(),
            message: message.to_string(),
            created_at: Instant::now(),
        });
    }

    pub(crate) fn show_info(&mut self, title: &str, message: &str) {
        self.push(NotificationKind::Info, title, message);
    }

    pub(crate) fn show_warning(&mut self, title: &str, message: &str) {
        self.push(NotificationKind::Warning, title, message);
    }

    pub(crate) fn recent_notifications(&self) -> Vec<&Notification> {
        self.notifications.iter().rev().take(5).collect()
    }

    pub(crate) fn cleanup_old_notifications(&mut self, max_age_secs: f32) {
        let now = Instant::now();
        self.notifications
            .retain(|n| now.duration_since(n.created_at).as_secs_f32() < max_age_secs);
    }
}
