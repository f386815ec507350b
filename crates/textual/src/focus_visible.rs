//! Keyboard focus-visibility classification.
//!
//! A [`FocusVisibilityTracker`] decides, for each focus an element receives,
//! whether a focus ring should be drawn. Focus counts as visible when:
//!
//! - the last global interaction was a navigation key (see
//!   [`ActivityMonitor`]), or
//! - the platform's own `:focus-visible` hint says so, or
//! - the element is an editable text field.
//!
//! Pointer-initiated focus is not visible. A blur without a visible hint
//! always clears visibility.
//!
//! Attaching takes a reference on the monitor's global listeners; the
//! returned [`Attachment`] gives it back when dropped. Handlers on a
//! detached tracker, or on one whose node was unmounted, do nothing.
//!
//! # Example
//!
//! ```
//! use textual::activity::{ActivityMonitor, PushEvents};
//! use textual::element::{ElementKind, NodeRef};
//! use textual::event::{ActivityEvent, FocusEvent};
//! use textual::focus_visible::FocusVisibilityTracker;
//! use textual::KeyCode;
//!
//! let monitor = ActivityMonitor::new(PushEvents);
//! let node = NodeRef::new("a", ElementKind::Other);
//! let attachment = FocusVisibilityTracker::attach(&monitor, &node).unwrap();
//! let tracker = attachment.tracker();
//!
//! monitor.dispatch(&ActivityEvent::key(KeyCode::Tab));
//! assert!(tracker.on_focus(&FocusEvent::new()));
//! assert!(tracker.is_visible());
//!
//! assert!(tracker.on_blur(&FocusEvent::new()));
//! assert!(!tracker.is_visible());
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::activity::ActivityMonitor;
use crate::element::NodeRef;
use crate::error::{Result, TextualError};
use crate::event::FocusEvent;

/// Classification state of one tracked element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusState {
    pub is_focus_visible: bool,
    /// Monitor's keyboard flag as seen by the last focus.
    pub had_keyboard_event: bool,
}

/// Live, read-only view of a tracker's visibility.
#[derive(Debug, Clone, Default)]
pub struct VisibleFlag(Rc<Cell<bool>>);

impl VisibleFlag {
    pub fn get(&self) -> bool {
        self.0.get()
    }

    fn set(&self, visible: bool) {
        self.0.set(visible);
    }
}

#[derive(Debug)]
struct TrackerInner {
    monitor: ActivityMonitor,
    node: NodeRef,
    state: FocusState,
    attached: bool,
}

/// Handle to an attached tracker; clones share state.
#[derive(Debug, Clone)]
pub struct FocusVisibilityTracker {
    inner: Rc<RefCell<TrackerInner>>,
    flag: VisibleFlag,
}

impl FocusVisibilityTracker {
    /// Starts tracking `node`, acquiring the monitor's global listeners.
    ///
    /// Fails with [`TextualError::Detached`] if `node` is already unmounted.
    /// A monitor without global events is not an error; the tracker then
    /// never reports visible.
    pub fn attach(monitor: &ActivityMonitor, node: &NodeRef) -> Result<Attachment> {
        if !node.is_mounted() {
            return Err(TextualError::Detached);
        }
        monitor.acquire();
        log::trace!("focus-visible: attached to node {}", node.id());

        let tracker = Self {
            inner: Rc::new(RefCell::new(TrackerInner {
                monitor: monitor.clone(),
                node: node.clone(),
                state: FocusState::default(),
                attached: true,
            })),
            flag: VisibleFlag::default(),
        };
        Ok(Attachment { tracker })
    }

    /// Classifies a focus event, returning whether it is visible.
    ///
    /// Repeated calls with no events in between give the same answer.
    pub fn on_focus(&self, event: &FocusEvent) -> bool {
        let mut inner = self.inner.borrow_mut();
        if !inner.is_live() {
            log::trace!("focus-visible: focus on detached node {} ignored", inner.node.id());
            return false;
        }

        let had_keyboard_event = inner.monitor.had_keyboard_event();
        let visible = inner.monitor.is_available()
            && (had_keyboard_event
                || event.focus_visible_hint == Some(true)
                || inner.node.kind().triggers_keyboard_modality());

        inner.state = FocusState {
            is_focus_visible: visible,
            had_keyboard_event,
        };
        self.flag.set(visible);
        visible
    }

    /// Handles a blur, returning whether visibility changed.
    pub fn on_blur(&self, event: &FocusEvent) -> bool {
        let mut inner = self.inner.borrow_mut();
        if !inner.is_live() {
            log::trace!("focus-visible: blur on detached node {} ignored", inner.node.id());
            return false;
        }
        if event.focus_visible_hint == Some(true) {
            return false;
        }

        let was_visible = inner.state.is_focus_visible;
        if was_visible {
            inner.monitor.note_visible_blur();
        }
        inner.state.is_focus_visible = false;
        self.flag.set(false);
        was_visible
    }

    pub fn is_visible(&self) -> bool {
        self.flag.get()
    }

    pub fn visible_flag(&self) -> VisibleFlag {
        self.flag.clone()
    }

    pub fn state(&self) -> FocusState {
        self.inner.borrow().state
    }

    pub fn is_attached(&self) -> bool {
        self.inner.borrow().attached
    }

    pub fn node(&self) -> NodeRef {
        self.inner.borrow().node.clone()
    }

    fn detach(&self) {
        let monitor = {
            let mut inner = self.inner.borrow_mut();
            if !inner.attached {
                return;
            }
            inner.attached = false;
            inner.state = FocusState::default();
            inner.monitor.clone()
        };
        self.flag.set(false);
        monitor.release();
    }
}

impl TrackerInner {
    fn is_live(&self) -> bool {
        self.attached && self.node.is_mounted()
    }
}

/// Keeps a tracker attached; dropping it detaches.
#[derive(Debug)]
#[must_use = "dropping the attachment detaches the tracker"]
pub struct Attachment {
    tracker: FocusVisibilityTracker,
}

impl Attachment {
    pub fn tracker(&self) -> FocusVisibilityTracker {
        self.tracker.clone()
    }

    pub fn detach(self) {}
}

impl Drop for Attachment {
    fn drop(&mut self) {
        self.tracker.detach();
        log::trace!("focus-visible: detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyCode;
    use crate::activity::{Headless, PushEvents};
    use crate::element::ElementKind;
    use crate::event::ActivityEvent;

    fn setup() -> (ActivityMonitor, NodeRef, Attachment) {
        let monitor = ActivityMonitor::new(PushEvents);
        let node = NodeRef::new("a", ElementKind::Other);
        let attachment = FocusVisibilityTracker::attach(&monitor, &node).unwrap();
        (monitor, node, attachment)
    }

    #[test]
    fn first_focus_is_not_visible() {
        let (_monitor, _node, attachment) = setup();
        assert!(!attachment.tracker().on_focus(&FocusEvent::new()));
    }

    #[test]
    fn native_hint_makes_focus_visible() {
        let (monitor, _node, attachment) = setup();
        monitor.dispatch(&ActivityEvent::mouse_down());
        assert!(attachment.tracker().on_focus(&FocusEvent::with_hint(true)));
    }

    #[test]
    fn blur_with_visible_hint_keeps_state() {
        let (monitor, _node, attachment) = setup();
        let tracker = attachment.tracker();
        monitor.dispatch(&ActivityEvent::key(KeyCode::Tab));
        tracker.on_focus(&FocusEvent::new());

        assert!(!tracker.on_blur(&FocusEvent::with_hint(true)));
        assert!(tracker.is_visible());
    }

    #[test]
    fn text_fields_are_always_visible() {
        let monitor = ActivityMonitor::new(PushEvents);
        let node = NodeRef::new("input", ElementKind::TextInput { read_only: false });
        let attachment = FocusVisibilityTracker::attach(&monitor, &node).unwrap();

        monitor.dispatch(&ActivityEvent::mouse_down());
        assert!(attachment.tracker().on_focus(&FocusEvent::new()));
    }

    #[test]
    fn headless_never_visible() {
        let monitor = ActivityMonitor::new(Headless);
        let node = NodeRef::new("input", ElementKind::ContentEditable);
        let attachment = FocusVisibilityTracker::attach(&monitor, &node).unwrap();
        let tracker = attachment.tracker();

        monitor.dispatch(&ActivityEvent::key(KeyCode::Tab));
        assert!(!tracker.on_focus(&FocusEvent::with_hint(true)));
        assert!(!tracker.is_visible());
    }

    #[test]
    fn attach_to_unmounted_node_fails() {
        let monitor = ActivityMonitor::new(PushEvents);
        let node = NodeRef::new("a", ElementKind::Other);
        node.unmount();
        assert!(matches!(
            FocusVisibilityTracker::attach(&monitor, &node),
            Err(TextualError::Detached)
        ));
        assert_eq!(monitor.ref_count(), 0);
    }

    #[test]
    fn unmounted_node_makes_handlers_inert() {
        let (monitor, node, attachment) = setup();
        let tracker = attachment.tracker();
        monitor.dispatch(&ActivityEvent::key(KeyCode::Tab));
        node.unmount();

        assert!(!tracker.on_focus(&FocusEvent::new()));
        assert_eq!(tracker.state(), FocusState::default());
    }

    #[test]
    fn focus_records_keyboard_flag() {
        let (monitor, _node, attachment) = setup();
        let tracker = attachment.tracker();
        monitor.dispatch(&ActivityEvent::key(KeyCode::Down));
        tracker.on_focus(&FocusEvent::new());
        assert_eq!(
            tracker.state(),
            FocusState {
                is_focus_visible: true,
                had_keyboard_event: true
            }
        );
    }
}
