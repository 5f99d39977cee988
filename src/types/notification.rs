use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::display::TerminalDisplay;
use crate::time::format_since;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub timestamp: u64,
    pub topic: String,
    pub message: String,
}

impl Notification {
    pub fn new(topic: impl ToString, message: impl ToString) -> Self {
        Self {
            timestamp: crate::time::now(),
            topic: topic.to_string(),
            message: message.to_string(),
        }
    }
}

impl TerminalDisplay for Notification {
    fn table_titles() -> Vec<&'static str> {
        vec!["Time", "Topic", "Message"]
    }

    fn table_row(self) -> Vec<String> {
        vec![format_since(self.timestamp), self.topic, self.message]
    }

    fn csv_titles() -> Vec<&'static str> {
        vec!["timestamp", "topic", "message"]
    }

    fn csv_row(self) -> HashMap<&'static str, String> {
        vec![
            ("timestamp", self.timestamp.to_string()),
            ("topic", self.topic),
            ("message", self.message),
        ]
        .into_iter()
        .collect()
    }
}
