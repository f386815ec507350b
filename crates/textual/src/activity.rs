//! Document-wide input modality tracking.
//!
//! An [`ActivityMonitor`] remembers whether the most recent interaction was a
//! keyboard navigation key or a pointer press. Focus-visibility trackers read
//! it when their element gains focus.
//!
//! The monitor owns the host's global listeners through [`GlobalEvents`] and
//! reference-counts them: the first [`acquire`](ActivityMonitor::acquire)
//! registers, the last [`release`](ActivityMonitor::release) unregisters and
//! resets the monitor to [`Modality::Idle`]. While nothing is registered,
//! dispatched events are dropped, exactly as a removed listener would never
//! fire.
//!
//! # Example
//!
//! ```
//! use textual::activity::{ActivityMonitor, Modality, PushEvents};
//! use textual::event::ActivityEvent;
//! use textual::KeyCode;
//!
//! let monitor = ActivityMonitor::new(PushEvents);
//! monitor.acquire();
//! monitor.dispatch(&ActivityEvent::key(KeyCode::Tab));
//! assert_eq!(monitor.modality(), Modality::KeyboardArmed);
//!
//! monitor.dispatch(&ActivityEvent::mouse_down());
//! assert_eq!(monitor.modality(), Modality::PointerArmed);
//! monitor.release();
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{Result, TextualError};
use crate::event::ActivityEvent;

/// A host that can deliver document-wide input events.
///
/// `register` is called when the first tracker attaches and `unregister`
/// when the last one detaches. Hosts without global events (headless
/// renderers, tests without a terminal) return
/// [`TextualError::EnvironmentUnavailable`] from `register`.
pub trait GlobalEvents {
    fn register(&mut self) -> Result<()>;
    fn unregister(&mut self);
}

/// Host whose events are pushed in by the caller via
/// [`ActivityMonitor::dispatch`], e.g. from a crossterm event loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct PushEvents;

impl GlobalEvents for PushEvents {
    fn register(&mut self) -> Result<()> {
        Ok(())
    }

    fn unregister(&mut self) {}
}

/// Host with no global event source.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl GlobalEvents for Headless {
    fn register(&mut self) -> Result<()> {
        Err(TextualError::EnvironmentUnavailable(
            "headless context has no global input events".into(),
        ))
    }

    fn unregister(&mut self) {}
}

/// The kind of the most recent interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modality {
    /// No interaction yet; treated as non-keyboard.
    #[default]
    Idle,
    KeyboardArmed,
    PointerArmed,
}

struct MonitorState {
    host: Box<dyn GlobalEvents>,
    modality: Modality,
    refs: usize,
    listening: bool,
    available: bool,
    /// An element lost a visible focus since the last interaction.
    visible_blur_pending: bool,
}

/// Shared, reference-counted modality service.
///
/// Cloning yields another handle to the same monitor.
#[derive(Clone)]
pub struct ActivityMonitor {
    inner: Rc<RefCell<MonitorState>>,
}

thread_local! {
    static CURRENT: ActivityMonitor = ActivityMonitor::new(PushEvents);
}

impl ActivityMonitor {
    pub fn new(host: impl GlobalEvents + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MonitorState {
                host: Box::new(host),
                modality: Modality::Idle,
                refs: 0,
                listening: false,
                available: true,
                visible_blur_pending: false,
            })),
        }
    }

    /// The UI thread's default monitor, fed by [`PushEvents`].
    pub fn current() -> Self {
        CURRENT.with(Clone::clone)
    }

    /// Takes a reference on the global listeners, registering them on 0→1.
    ///
    /// A host that can't register switches the monitor to unavailable
    /// mode for as long as references are held.
    pub fn acquire(&self) {
        let mut state = self.inner.borrow_mut();
        state.refs += 1;
        if state.refs > 1 {
            return;
        }
        match state.host.register() {
            Ok(()) => {
                log::debug!("activity monitor: global listeners registered");
                state.listening = true;
                state.available = true;
            }
            Err(err) => {
                log::warn!("activity monitor: {}; focus rings disabled", err);
                state.listening = false;
                state.available = false;
            }
        }
    }

    /// Drops a reference, unregistering on 1→0.
    pub fn release(&self) {
        let mut state = self.inner.borrow_mut();
        if state.refs == 0 {
            log::trace!("activity monitor: release without acquire ignored");
            return;
        }
        state.refs -= 1;
        if state.refs > 0 {
            return;
        }
        if state.listening {
            state.host.unregister();
            log::debug!("activity monitor: global listeners unregistered");
        }
        state.listening = false;
        state.available = true;
        state.modality = Modality::Idle;
        state.visible_blur_pending = false;
    }

    /// Feeds a global event, updating modality.
    pub fn dispatch(&self, event: &ActivityEvent) {
        let mut state = self.inner.borrow_mut();
        if !state.listening {
            log::trace!("activity monitor: not listening, dropped {:?}", event);
            return;
        }
        match event {
            ActivityEvent::KeyDown(_) if event.is_navigation_key() => {
                state.modality = Modality::KeyboardArmed;
                state.visible_blur_pending = false;
            }
            ActivityEvent::KeyDown(_) => {}
            ActivityEvent::PointerDown(_) => {
                state.modality = Modality::PointerArmed;
                state.visible_blur_pending = false;
            }
            ActivityEvent::VisibilityHidden => {
                if state.visible_blur_pending {
                    // Restore the ring when the window comes back.
                    state.modality = Modality::KeyboardArmed;
                }
            }
            ActivityEvent::VisibilityVisible => {}
        }
        log::trace!("activity monitor: {:?} -> {:?}", event, state.modality);
    }

    pub fn modality(&self) -> Modality {
        self.inner.borrow().modality
    }

    pub fn had_keyboard_event(&self) -> bool {
        self.modality() == Modality::KeyboardArmed
    }

    /// False while registered on a host without global events.
    pub fn is_available(&self) -> bool {
        self.inner.borrow().available
    }

    pub fn is_listening(&self) -> bool {
        self.inner.borrow().listening
    }

    pub fn ref_count(&self) -> usize {
        self.inner.borrow().refs
    }

    pub(crate) fn note_visible_blur(&self) {
        self.inner.borrow_mut().visible_blur_pending = true;
    }

    /// Whether two handles refer to the same monitor.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ActivityMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("ActivityMonitor")
            .field("modality", &state.modality)
            .field("refs", &state.refs)
            .field("listening", &state.listening)
            .field("available", &state.available)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyCode;

    #[test]
    fn starts_idle_and_non_keyboard() {
        let monitor = ActivityMonitor::new(PushEvents);
        assert_eq!(monitor.modality(), Modality::Idle);
        assert!(!monitor.had_keyboard_event());
    }

    #[test]
    fn events_before_acquire_are_dropped() {
        let monitor = ActivityMonitor::new(PushEvents);
        monitor.dispatch(&ActivityEvent::key(KeyCode::Tab));
        assert_eq!(monitor.modality(), Modality::Idle);
    }

    #[test]
    fn last_release_resets_modality() {
        let monitor = ActivityMonitor::new(PushEvents);
        monitor.acquire();
        monitor.acquire();
        monitor.dispatch(&ActivityEvent::key(KeyCode::Tab));

        monitor.release();
        assert!(monitor.had_keyboard_event());
        monitor.release();
        assert_eq!(monitor.modality(), Modality::Idle);
        assert_eq!(monitor.ref_count(), 0);

        monitor.release();
        assert_eq!(monitor.ref_count(), 0);
    }

    #[test]
    fn non_navigation_keys_leave_modality_alone() {
        let monitor = ActivityMonitor::new(PushEvents);
        monitor.acquire();
        monitor.dispatch(&ActivityEvent::mouse_down());
        monitor.dispatch(&ActivityEvent::key(KeyCode::Char('x')));
        assert_eq!(monitor.modality(), Modality::PointerArmed);
    }

    #[test]
    fn hidden_document_rearms_after_visible_blur() {
        let monitor = ActivityMonitor::new(PushEvents);
        monitor.acquire();
        monitor.dispatch(&ActivityEvent::mouse_down());
        monitor.dispatch(&ActivityEvent::VisibilityHidden);
        assert_eq!(monitor.modality(), Modality::PointerArmed);

        monitor.note_visible_blur();
        monitor.dispatch(&ActivityEvent::VisibilityHidden);
        assert_eq!(monitor.modality(), Modality::KeyboardArmed);
    }

    #[test]
    fn headless_is_unavailable_until_released() {
        let monitor = ActivityMonitor::new(Headless);
        assert!(monitor.is_available());
        monitor.acquire();
        assert!(!monitor.is_available());
        assert!(!monitor.is_listening());
        monitor.release();
        assert!(monitor.is_available());
    }

    #[test]
    fn current_is_shared_per_thread() {
        assert!(ActivityMonitor::current().ptr_eq(&ActivityMonitor::current()));
    }
}
