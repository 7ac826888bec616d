use chrono::{DateTime, Local};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationIcon {
    #[default]
    Info,
    Warning,
    Error,
}

/// A one-line message for the player. Stays queued until marked read.
#[derive(Clone, Debug)]
pub struct Notification {
    pub text: String,
    pub icon: NotificationIcon,
    pub read: bool,
    pub posted_at: DateTime<Local>,
}

/// Queue of pending notifications, owned by the app shell. A front-end
/// renders unread entries however it likes; read entries can be drained.
#[derive(Default)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, text: impl Into<String>, icon: NotificationIcon) {
        self.entries.push(Notification {
            text: text.into(),
            icon,
            read: false,
            posted_at: Local::now(),
        });
    }

    /// Marks the entry at `index` read. Out-of-range indices are ignored.
    pub fn mark_read(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.read = true;
        }
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Removes read entries, keeping unread ones in order.
    pub fn drain_read(&mut self) {
        self.entries.retain(|n| !n.read);
    }
}
