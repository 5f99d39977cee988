mod console;

pub use console::ConsoleSink;

use std::cell::RefCell;

use crate::types::notification::Notification;

/// Delivery target for notifications. Fire-and-forget: a sink cannot fail
/// the publish, and nobody waits on it.
pub trait NotificationSink {
    fn notify(&self, notification: &Notification);
}

/// Fans every published notification out to the registered sinks and
/// keeps an in-memory history for reporting.
pub struct NotificationCenter {
    sinks: Vec<Box<dyn NotificationSink>>,
    history: RefCell<Vec<Notification>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            history: RefCell::new(Vec::new()),
        }
    }

    pub fn register_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    pub fn publish(&self, topic: impl ToString, message: impl ToString) {
        let notification = Notification::new(topic, message);
        for sink in self.sinks.iter() {
            sink.notify(&notification);
        }
        self.history.borrow_mut().push(notification);
    }

    pub fn history(&self) -> Vec<Notification> {
        self.history.borrow().clone()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
