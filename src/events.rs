//! Locale-changed notifications.
//!
//! A fire-and-observe broadcast channel: the switch handler publishes one
//! [`LocaleChanged`] per successful switch, and any number of collaborators
//! (analytics, translation cache invalidation, ...) may subscribe. Emitting
//! with zero subscribers is not an error.

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::info;

/// Emitted exactly once per successful locale switch, after session and
/// cookie state are updated and before the redirect is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleChanged {
    pub new_locale: String,
    pub old_locale: Option<String>,
}

/// Cloneable handle to the locale-changed notification channel.
#[derive(Debug, Clone)]
pub struct LocaleEvents {
    sender: broadcast::Sender<LocaleChanged>,
}

impl LocaleEvents {
    pub fn new() -> Self {
        // Slow observers drop old notifications rather than backpressuring
        // request handling.
        let (sender, _) = broadcast::channel(16);
        Self { sender }
    }

    /// Subscribe to future locale changes.
    pub fn subscribe(&self) -> broadcast::Receiver<LocaleChanged> {
        self.sender.subscribe()
    }

    /// Publish a locale change. Returns the number of observers reached.
    pub fn emit(&self, event: LocaleChanged) -> usize {
        info!(
            "Locale changed: {} -> {}",
            event.old_locale.as_deref().unwrap_or("(none)"),
            event.new_locale
        );
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for LocaleEvents {
    fn default() -> Self {
        Self::new()
    }
}
