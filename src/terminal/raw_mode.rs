//! RAII guards for terminal modes.

use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;

/// Guard that ensures raw mode is disabled when dropped.
pub struct RawModeGuard {
    was_enabled: bool,
}

impl RawModeGuard {
    /// Enable raw mode, returning a guard that will disable it on drop.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { was_enabled: true })
    }

    /// Manually disable raw mode (also happens on drop).
    pub fn disable(&mut self) {
        if self.was_enabled {
            let _ = disable_raw_mode();
            self.was_enabled = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}

/// Raw mode on the alternate screen with the cursor hidden, for the
/// full-screen view. Everything is restored on drop, including on panic.
pub struct ScreenGuard {
    raw: RawModeGuard,
}

impl ScreenGuard {
    pub fn enter() -> io::Result<Self> {
        let raw = RawModeGuard::new()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { raw })
    }

    /// Leave raw mode and show the cursor while staying on the alternate
    /// screen, so a line editor can take over input.
    pub fn suspend(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show);
        self.raw.disable();
    }

    pub fn resume(&mut self) -> io::Result<()> {
        self.raw = RawModeGuard::new()?;
        execute!(io::stdout(), cursor::Hide)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        self.raw.disable();
    }
}
