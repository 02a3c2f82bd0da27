#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Warn,
    Error,
}

impl AlertLevel {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Info => "Done",
            Self::Warn => "Check input",
            Self::Error => "Error",
        }
    }
}

/// Blocking message shown until the user dismisses it.
#[derive(Debug, Clone)]
pub struct Alert {
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
}

impl Alert {
    #[must_use]
    pub fn new(level: AlertLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            title: level.title().to_string(),
            message: message.into(),
        }
    }
}
