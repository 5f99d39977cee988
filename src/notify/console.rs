use log::info;

use crate::types::notification::Notification;

use super::NotificationSink;

/// Writes notifications to the application log.
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for ConsoleSink {
    fn notify(&self, notification: &Notification) {
        info!("Notification [{}] {}", notification.topic, notification.message);
    }
}
