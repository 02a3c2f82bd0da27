use std::collections::VecDeque;

use crate::domain::{Alert, AlertLevel};

/// Queue of blocking alerts, shown one at a time until dismissed.
#[derive(Debug, Default)]
pub struct AlertManager {
    queue: VecDeque<Alert>,
}

impl AlertManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, alert: Alert) {
        tracing::debug!(title = %alert.title, message = %alert.message, "Alert raised");
        self.queue.push_back(alert);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Alert::new(AlertLevel::Info, message));
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(Alert::new(AlertLevel::Warn, message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Alert::new(AlertLevel::Error, message));
    }

    /// Removes the alert on screen and returns it.
    pub fn dismiss(&mut self) -> Option<Alert> {
        self.queue.pop_front()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Alert> {
        self.queue.front()
    }

    #[must_use]
    pub fn has_alerts(&self) -> bool {
        !self.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
