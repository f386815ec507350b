//! # Textual - accessible widget layer
//!
//! Widgets and input plumbing on top of [`tcss`] themes:
//!
//! - [`activity`]: the document-wide [`ActivityMonitor`] tracking whether the
//!   user is navigating by keyboard or pointer
//! - [`focus_visible`]: per-element [`FocusVisibilityTracker`]s deciding when
//!   a focus ring is shown
//! - [`widget`]: the [`Widget`] trait, [`Typography`] and [`Link`]
//! - [`context`]: [`ThemeContext`], the widgets' read-only view of the theme
//!
//! Terminal input arrives as crossterm events and is converted with
//! [`ActivityEvent::from_crossterm`].

pub mod activity;
pub mod classes;
pub mod context;
pub mod element;
pub mod error;
pub mod event;
pub mod focus_visible;
mod log_init;
pub mod testing;
pub mod widget;

pub use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

pub use activity::{ActivityMonitor, GlobalEvents, Headless, Modality, PushEvents};
pub use classes::compose_classes;
pub use context::{ResolveMode, ThemeContext};
pub use element::{Anchor, ButtonElement, CustomElement, ElementKind, NodeRef, RootElement};
pub use error::{Result, TextualError};
pub use event::{ActivityEvent, FocusEvent, PointerKind};
pub use focus_visible::{Attachment, FocusState, FocusVisibilityTracker, VisibleFlag};
pub use log_init::{init_logger, init_logger_with_level};
pub use widget::Widget;
pub use widget::link::Link;
pub use widget::typography::{RenderedNode, Typography};

// Re-export the log crate so users can use textual::log::info!, etc.
pub use log;
pub use tcss::{TcssError, types::Theme};
