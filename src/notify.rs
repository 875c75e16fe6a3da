//! Transient notification line.

use std::time::{Duration, Instant};

pub const NOTIFY_DURATION: Duration = Duration::from_millis(2000);

pub const COPIED: &str = "Password copied to clipboard!";
pub const HISTORY_CLEARED: &str = "History cleared!";

/// One message slot with a hide deadline. Showing a new message while one is
/// visible replaces it and restarts the deadline.
#[derive(Debug, Default)]
pub struct Notifier {
    message: Option<String>,
    hide_at: Option<Instant>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some(message.into());
        self.hide_at = Some(now + NOTIFY_DURATION);
    }

    /// Hide the message once its deadline has passed. Returns true when the
    /// visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.message = None;
                self.hide_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self, now: Instant) -> Option<&str> {
        match self.hide_at {
            Some(deadline) if now < deadline => self.message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_hides_after_two_seconds() {
        let start = Instant::now();
        let mut notifier = Notifier::new();
        notifier.show("hello", start);

        assert_eq!(notifier.current(start), Some("hello"));
        assert!(!notifier.tick(start + Duration::from_millis(1999)));
        assert!(notifier.tick(start + NOTIFY_DURATION));
        assert_eq!(notifier.current(start + NOTIFY_DURATION), None);
    }

    #[test]
    fn reschedule_cancels_the_pending_hide() {
        let start = Instant::now();
        let mut notifier = Notifier::new();
        notifier.show("first", start);

        let later = start + Duration::from_millis(1500);
        notifier.show("second", later);

        let old_deadline = start + NOTIFY_DURATION;
        assert!(!notifier.tick(old_deadline));
        assert_eq!(notifier.current(old_deadline), Some("second"));
        assert!(notifier.tick(later + NOTIFY_DURATION));
    }

    #[test]
    fn tick_without_message_is_a_no_op() {
        let mut notifier = Notifier::new();
        assert!(!notifier.tick(Instant::now()));
        assert_eq!(notifier.current(Instant::now()), None);
    }
}
