//! Input events consumed by the focus-visibility machinery.
//!
//! [`ActivityEvent`]s are document-wide: key presses, pointer presses and
//! visibility changes delivered by the host's global listeners. A
//! [`FocusEvent`] is local to one element and carries the platform's own
//! focus-visible hint when it has one.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// What kind of device produced a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

/// A document-wide input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityEvent {
    KeyDown(KeyEvent),
    PointerDown(PointerKind),
    /// The document (terminal window) lost visibility.
    VisibilityHidden,
    VisibilityVisible,
}

impl ActivityEvent {
    /// Key press with no modifiers.
    pub fn key(code: KeyCode) -> Self {
        Self::KeyDown(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub fn mouse_down() -> Self {
        Self::PointerDown(PointerKind::Mouse)
    }

    pub fn touch_start() -> Self {
        Self::PointerDown(PointerKind::Touch)
    }

    /// Maps a terminal event onto an activity event.
    ///
    /// Key releases, mouse moves and other events return `None`.
    pub fn from_crossterm(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(Self::KeyDown(*key)),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(_) => Some(Self::PointerDown(PointerKind::Mouse)),
                _ => None,
            },
            Event::FocusLost => Some(Self::VisibilityHidden),
            Event::FocusGained => Some(Self::VisibilityVisible),
            _ => None,
        }
    }

    /// Whether this is a key press that signals keyboard navigation.
    pub fn is_navigation_key(&self) -> bool {
        match self {
            Self::KeyDown(key) => is_navigation_key(key),
            _ => false,
        }
    }
}

/// Keys that move focus or scroll, pressed without a shortcut modifier.
///
/// Shift is allowed (Shift+Tab arrives as `BackTab`).
pub fn is_navigation_key(key: &KeyEvent) -> bool {
    let chord = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META;
    if key.modifiers.intersects(chord) {
        return false;
    }
    matches!(
        key.code,
        KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::PageUp
            | KeyCode::PageDown
    )
}

/// A focus or blur delivered to a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusEvent {
    /// The platform's native `:focus-visible` answer, if it has one.
    pub focus_visible_hint: Option<bool>,
}

impl FocusEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hint(visible: bool) -> Self {
        Self {
            focus_visible_hint: Some(visible),
        }
    }
}
