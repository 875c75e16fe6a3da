//! Application state and the handlers the front-ends call.
//!
//! `App` owns the settings, history, notification slot and current password,
//! plus the injected storage, clipboard and random source. Front-ends turn
//! user input into [`Action`]s, feed them to [`App::dispatch`] and draw
//! [`App::view`]. Errors never leave a handler: `dispatch` logs them and
//! turns them into notifications.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, warn};
use zeroize::Zeroize;

use crate::clipboard::Clipboard;
use crate::error::{Error, Result};
use crate::history::{Entry, History};
use crate::notify::{self, Notifier};
use crate::pass::{self, charset, charset::CharClass};
use crate::settings::{Settings, SettingsStore, Storage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetLength(usize),
    SetOption { name: String, checked: bool },
    Generate,
    CopyCurrent,
    /// Copy the history entry with this 1-based index.
    CopyHistory(usize),
    ClearHistory,
}

/// Read-only snapshot for rendering.
#[derive(Debug)]
pub struct View<'a> {
    pub length: usize,
    /// Every catalog class with its checked state, in catalog order.
    pub options: Vec<(CharClass, bool)>,
    pub password: &'a str,
    pub history: &'a [Entry],
    pub notification: Option<&'a str>,
    pub entropy_bits: f64,
    pub strength: &'static str,
}

pub struct App<S, C, R> {
    store: SettingsStore<S>,
    settings: Settings,
    history: History,
    notifier: Notifier,
    current: String,
    clipboard: C,
    rng: R,
}

impl<S: Storage, C: Clipboard, R: Rng> App<S, C, R> {
    pub fn new(store: SettingsStore<S>, clipboard: C, rng: R) -> Self {
        Self {
            store,
            settings: Settings::default(),
            history: History::new(),
            notifier: Notifier::new(),
            current: String::new(),
            clipboard,
            rng,
        }
    }

    /// Restore persisted settings and produce the first password, which also
    /// seeds the history.
    pub fn startup(&mut self, now: Instant) {
        self.settings = self.store.load();
        if let Err(e) = self.refresh() {
            self.report(&e, now);
        }
    }

    /// Run one handler. Returns false when it failed; the failure has
    /// already been logged and shown.
    pub fn dispatch(&mut self, action: Action, now: Instant) -> bool {
        debug!(?action, "dispatch");
        let result = match action {
            Action::SetLength(length) => self.set_length(length),
            Action::SetOption { name, checked } => self.set_option(&name, checked).map(|_| ()),
            Action::Generate => self.generate().map(|_| ()),
            Action::CopyCurrent => self.copy_current(now),
            Action::CopyHistory(index) => self.copy_history(index, now),
            Action::ClearHistory => self.clear_history(now),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                self.report(&e, now);
                false
            }
        }
    }

    pub fn set_length(&mut self, length: usize) -> Result<()> {
        self.settings.set_length(length)?;
        self.store.save(&self.settings)
    }

    /// Check or uncheck a class. Unchecking the last one fails and keeps it
    /// checked.
    pub fn set_option(&mut self, name: &str, checked: bool) -> Result<bool> {
        let changed = self.settings.set_option(name, checked)?;
        self.store.save(&self.settings)?;
        Ok(changed)
    }

    /// Flip one class by catalog position.
    pub fn toggle(&mut self, class: CharClass, now: Instant) -> bool {
        let checked = !self.settings.is_selected(class.name());
        self.dispatch(
            Action::SetOption {
                name: class.name().to_string(),
                checked,
            },
            now,
        )
    }

    /// Generate a new password and add it to the history.
    pub fn generate(&mut self) -> Result<&str> {
        let seeded = self.history.is_empty();
        self.refresh()?;
        if !seeded {
            self.history.append(&self.current);
        }
        Ok(self.current.as_str())
    }

    pub fn copy_current(&mut self, now: Instant) -> Result<()> {
        if self.current.is_empty() {
            return Err(Error::InvalidConfiguration("Nothing to copy!".to_string()));
        }
        self.clipboard.write_text(&self.current)?;
        self.notifier.show(notify::COPIED, now);
        Ok(())
    }

    pub fn copy_history(&mut self, index: usize, now: Instant) -> Result<()> {
        let entry = self.history.get(index).ok_or_else(|| {
            Error::InvalidConfiguration(format!("No history entry {index}"))
        })?;
        self.clipboard.write_text(&entry.password)?;
        self.notifier.show(notify::COPIED, now);
        Ok(())
    }

    /// Empty the history, then generate a fresh password that seeds it again.
    pub fn clear_history(&mut self, now: Instant) -> Result<()> {
        self.history.clear();
        self.refresh()?;
        self.notifier.show(notify::HISTORY_CLEARED, now);
        Ok(())
    }

    /// Expire the notification. Returns true when the screen needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notifier.tick(now)
    }

    pub fn view(&self, now: Instant) -> View<'_> {
        let pool_size = charset::pool_size(&self.settings.selected_options);
        let entropy_bits = pass::entropy_bits(self.settings.password_length, pool_size);
        View {
            length: self.settings.password_length,
            options: CharClass::ALL
                .into_iter()
                .map(|c| (c, self.settings.is_selected(c.name())))
                .collect(),
            password: &self.current,
            history: self.history.entries(),
            notification: self.notifier.current(now),
            entropy_bits,
            strength: pass::strength_label(entropy_bits),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    #[cfg(test)]
    pub fn store(&self) -> &SettingsStore<S> {
        &self.store
    }

    #[cfg(test)]
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Replace the current password; seeds the history when it is empty.
    fn refresh(&mut self) -> Result<()> {
        let password = pass::generate_for(&self.settings, &mut self.rng)?;
        self.current.zeroize();
        self.current = password;
        if self.history.is_empty() {
            self.history.append(&self.current);
        }
        Ok(())
    }

    fn report(&mut self, error: &Error, now: Instant) {
        warn!(error = %error, "handler failed");
        self.notifier.show(error.notice(), now);
    }
}

impl<S, C, R> Drop for App<S, C, R> {
    fn drop(&mut self) {
        self.current.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::settings::{MemoryStorage, SETTINGS_KEY};

    #[derive(Default)]
    struct FakeClipboard {
        contents: Option<String>,
        broken: bool,
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.broken {
                return Err(Error::ClipboardUnavailable("no display".to_string()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    type TestApp = App<MemoryStorage, FakeClipboard, StdRng>;

    fn app_with(storage: MemoryStorage) -> TestApp {
        let mut app = App::new(
            SettingsStore::new(storage),
            FakeClipboard::default(),
            StdRng::seed_from_u64(42),
        );
        app.startup(Instant::now());
        app
    }

    fn app() -> TestApp {
        app_with(MemoryStorage::new())
    }

    fn persisted(app: &TestApp) -> Settings {
        let text = app.store().storage().get(SETTINGS_KEY).unwrap().unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn startup_persists_defaults_and_seeds_history() {
        let app = app();

        assert_eq!(persisted(&app), Settings::default());
        assert_eq!(app.current().chars().count(), 12);
        assert_eq!(app.history().lines(), vec![format!("1. {}", app.current())]);
    }

    #[test]
    fn startup_with_corrupt_storage_uses_defaults() {
        let app = app_with(MemoryStorage::with_entry(SETTINGS_KEY, "[1,2"));
        assert_eq!(app.settings(), &Settings::default());
        assert_eq!(persisted(&app), Settings::default());
    }

    #[test]
    fn startup_with_oversized_stored_length_uses_defaults() {
        let json = r#"{"passwordLength":18446744073709551615,"selectedOptions":["numbers"]}"#;
        let app = app_with(MemoryStorage::with_entry(SETTINGS_KEY, json));

        assert_eq!(app.settings(), &Settings::default());
        assert_eq!(app.current().chars().count(), 12);
        assert_eq!(persisted(&app), Settings::default());
    }

    #[test]
    fn length_and_option_changes_are_persisted_and_used() {
        let mut app = app();
        let now = Instant::now();

        assert!(app.dispatch(Action::SetLength(20), now));
        assert!(app.dispatch(
            Action::SetOption {
                name: "special".to_string(),
                checked: false,
            },
            now,
        ));

        let saved = persisted(&app);
        assert_eq!(saved.password_length, 20);
        assert_eq!(saved.selected_options, vec!["lowercase", "uppercase", "numbers"]);

        let password = app.generate().unwrap().to_string();
        assert_eq!(password.chars().count(), 20);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(app.history().len(), 2);
        assert_eq!(app.history().lines()[1], format!("2. {password}"));
    }

    #[test]
    fn unchecking_the_last_option_keeps_it_and_notifies() {
        let mut app = app();
        let now = Instant::now();
        for class in [CharClass::Lowercase, CharClass::Uppercase, CharClass::Numbers] {
            assert!(app.toggle(class, now));
        }

        assert!(!app.toggle(CharClass::Special, now));

        assert_eq!(app.settings().selected_options, vec!["special"]);
        assert_eq!(persisted(&app).selected_options, vec!["special"]);
        assert_eq!(
            app.view(now).notification,
            Some("Must select at least one option!")
        );
    }

    #[test]
    fn zero_length_is_rejected_without_saving() {
        let mut app = app();
        assert!(!app.dispatch(Action::SetLength(0), Instant::now()));
        assert_eq!(persisted(&app).password_length, 12);
    }

    #[test]
    fn copy_writes_current_password_and_notifies() {
        let mut app = app();
        let now = Instant::now();

        assert!(app.dispatch(Action::CopyCurrent, now));

        assert_eq!(app.clipboard().contents.as_deref(), Some(app.current()));
        assert_eq!(app.view(now).notification, Some(notify::COPIED));
    }

    #[test]
    fn copy_history_uses_the_selected_entry() {
        let mut app = app();
        let first = app.current().to_string();
        app.generate().unwrap();

        assert!(app.dispatch(Action::CopyHistory(1), Instant::now()));
        assert_eq!(app.clipboard().contents.as_deref(), Some(first.as_str()));
        assert!(!app.dispatch(Action::CopyHistory(9), Instant::now()));
    }

    #[test]
    fn clipboard_failure_surfaces_as_a_notification() {
        let mut app = app();
        app.clipboard.broken = true;
        let now = Instant::now();

        assert!(!app.dispatch(Action::CopyCurrent, now));
        assert_eq!(app.view(now).notification, Some("Could not copy to clipboard!"));
    }

    #[test]
    fn clearing_history_reseeds_with_a_fresh_password() {
        let mut app = app();
        app.generate().unwrap();
        app.generate().unwrap();
        let now = Instant::now();

        assert!(app.dispatch(Action::ClearHistory, now));

        assert_eq!(app.history().lines(), vec![format!("1. {}", app.current())]);
        assert_eq!(app.view(now).notification, Some(notify::HISTORY_CLEARED));
    }

    #[test]
    fn notification_expires_on_tick() {
        let mut app = app();
        let now = Instant::now();
        app.dispatch(Action::CopyCurrent, now);

        let later = now + notify::NOTIFY_DURATION;
        assert!(app.tick(later));
        assert_eq!(app.view(later).notification, None);
    }

    #[test]
    fn view_lists_classes_in_catalog_order() {
        let mut app = app();
        app.set_option("uppercase", false).unwrap();
        let view = app.view(Instant::now());

        assert_eq!(
            view.options,
            vec![
                (CharClass::Lowercase, true),
                (CharClass::Uppercase, false),
                (CharClass::Numbers, true),
                (CharClass::Special, true),
            ]
        );
        assert_eq!(view.length, 12);
        assert!(view.entropy_bits > 0.0);
    }
}
