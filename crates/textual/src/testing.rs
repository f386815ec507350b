//! Test utilities for focus tracking and link rendering.
//!
//! [`RecordingHost`] is a [`GlobalEvents`] host that counts register and
//! unregister calls, so tests can check that listeners are shared and torn
//! down. The `material_*` helpers build a context on the `material-light`
//! theme with a fresh monitor, so tests never share modality.
//!
//! # Example
//!
//! ```
//! use textual::testing::{RecordingHost, material_context_on};
//! use textual::widget::link::Link;
//!
//! let host = RecordingHost::new();
//! let ctx = material_context_on(host.clone());
//!
//! let mut link: Link<()> = Link::new("Docs");
//! link.mount(&ctx).unwrap();
//! assert_eq!(host.registrations(), 1);
//! link.unmount();
//! assert_eq!(host.unregistrations(), 1);
//! ```

use std::cell::Cell;
use std::rc::Rc;

use tcss::Theme;

use crate::activity::{ActivityMonitor, GlobalEvents, PushEvents};
use crate::context::ThemeContext;
use crate::error::{Result, TextualError};

#[derive(Debug, Default)]
struct Counters {
    registrations: Cell<usize>,
    unregistrations: Cell<usize>,
    fail: Cell<bool>,
}

/// Host that records listener registration.
///
/// Clones share counters; hand one clone to the monitor and keep another.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    counters: Rc<Counters>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose registration fails like a headless environment.
    pub fn unavailable() -> Self {
        let host = Self::new();
        host.counters.fail.set(true);
        host
    }

    pub fn registrations(&self) -> usize {
        self.counters.registrations.get()
    }

    pub fn unregistrations(&self) -> usize {
        self.counters.unregistrations.get()
    }

    /// Registered and not yet unregistered.
    pub fn is_registered(&self) -> bool {
        self.registrations() > self.unregistrations()
    }
}

impl GlobalEvents for RecordingHost {
    fn register(&mut self) -> Result<()> {
        if self.counters.fail.get() {
            return Err(TextualError::EnvironmentUnavailable(
                "recording host set to fail".into(),
            ));
        }
        let count = self.counters.registrations.get();
        self.counters.registrations.set(count + 1);
        Ok(())
    }

    fn unregister(&mut self) {
        let count = self.counters.unregistrations.get();
        self.counters.unregistrations.set(count + 1);
    }
}

/// The `material-light` standard theme.
pub fn material_theme() -> Theme {
    Theme::standard_themes()
        .remove("material-light")
        .unwrap_or_else(|| Theme::new("material-light", false))
}

/// `material-light` context on a private push-events monitor.
pub fn material_context() -> ThemeContext {
    ThemeContext::with_monitor(material_theme(), ActivityMonitor::new(PushEvents))
}

/// `material-light` context on a private monitor fed by `host`.
pub fn material_context_on(host: impl GlobalEvents + 'static) -> ThemeContext {
    ThemeContext::with_monitor(material_theme(), ActivityMonitor::new(host))
}
