//! Accessible, themed links for terminal and document UIs.
//!
//! This crate bundles the two workspace crates:
//!
//! - [`tcss`]: themes, palettes and underline decoration colors
//! - [`textual`]: the activity monitor, focus-visible tracking and the
//!   [`Link`](textual::Link) widget
//!
//! [`run_event_loop`] feeds a real terminal's input into an
//! [`ActivityMonitor`] so mounted links see keyboard and pointer modality.

pub use tcss;
pub use textual;

use std::time::Duration;

use crossterm::{cursor, event, execute, terminal};
use textual::{ActivityEvent, ActivityMonitor, Event};

pub mod prelude {
    pub use tcss::{ColorToken, LinkDefaults, Theme, TypographyVariant, UnderlinePolicy};
    pub use textual::{
        ActivityEvent, ActivityMonitor, FocusEvent, KeyCode, Link, ResolveMode, ThemeContext,
        Typography, Widget,
    };
}

/// Forwards a terminal event to `monitor`.
///
/// Returns true if the event changed or could change modality.
pub fn pump(monitor: &ActivityMonitor, event: &Event) -> bool {
    match ActivityEvent::from_crossterm(event) {
        Some(activity) => {
            monitor.dispatch(&activity);
            true
        }
        None => false,
    }
}

/// Runs a restore action once: on [`finish`](TerminalGuard::finish), or on
/// drop when an early return skips it.
pub struct TerminalGuard<F>
where
    F: FnOnce() -> textual::Result<()>,
{
    restore: Option<F>,
}

impl<F> TerminalGuard<F>
where
    F: FnOnce() -> textual::Result<()>,
{
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    /// Restores now and reports the restore error.
    pub fn finish(mut self) -> textual::Result<()> {
        match self.restore.take() {
            Some(restore) => restore(),
            None => Ok(()),
        }
    }
}

impl<F> Drop for TerminalGuard<F>
where
    F: FnOnce() -> textual::Result<()>,
{
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            if let Err(err) = restore() {
                log::warn!("terminal restore failed: {}", err);
            }
        }
    }
}

/// Leaves the alternate screen and raw mode.
///
/// Raw mode is disabled even if the screen commands fail; the first error
/// is returned.
fn restore_terminal() -> textual::Result<()> {
    let mut stdout = std::io::stdout();
    let screen = execute!(
        stdout,
        event::DisableFocusChange,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
    let raw = terminal::disable_raw_mode();
    screen?;
    raw?;
    Ok(())
}

/// Runs a raw-mode terminal loop until `on_event` returns true.
///
/// Mouse capture and focus reporting are enabled so pointer presses and
/// window switches reach the monitor. Every event is pumped into `monitor`
/// before `on_event` sees it. The terminal is restored on every exit path;
/// a loop error takes precedence over a restore error.
pub fn run_event_loop<F>(monitor: &ActivityMonitor, mut on_event: F) -> textual::Result<()>
where
    F: FnMut(&Event) -> textual::Result<bool>,
{
    terminal::enable_raw_mode()?;
    let guard = TerminalGuard::new(restore_terminal);
    let mut stdout = std::io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture,
        event::EnableFocusChange
    )?;

    let result = (|| -> textual::Result<()> {
        loop {
            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            let event = event::read()?;
            pump(monitor, &event);
            if on_event(&event)? {
                return Ok(());
            }
        }
    })();

    let restored = guard.finish();
    result.and(restored)
}
