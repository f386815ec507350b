pub mod link;
pub mod typography;

use tcss::{WidgetMeta, WidgetStates};

use crate::KeyCode;
use crate::context::ThemeContext;
use crate::error::Result;
use crate::widget::typography::RenderedNode;

/// A widget that can render itself and handle events.
/// Generic over `M`, the message type that events produce.
pub trait Widget<M> {
    /// Render the widget against the given theme.
    fn render(&self, ctx: &ThemeContext) -> Result<RenderedNode>;

    /// Returns the widget's current pseudo-class states (focus, hover, active, disabled).
    ///
    /// Override this in widgets that support interactive states.
    fn get_state(&self) -> WidgetStates {
        let mut states = WidgetStates::empty();
        if self.is_focused() {
            states |= WidgetStates::FOCUS;
        }
        if self.is_disabled() {
            states |= WidgetStates::DISABLED;
        }
        states
    }

    /// Returns metadata for selector matching.
    fn get_meta(&self) -> WidgetMeta {
        WidgetMeta {
            type_name: self.type_name(),
            id: self.id().map(|s| s.to_string()),
            classes: Vec::new(),
            states: self.get_state(),
        }
    }

    // Focus management
    fn set_focus(&mut self, _is_focused: bool) {}

    fn is_focused(&self) -> bool {
        false
    }

    /// Returns true if this widget's style needs to be recomputed.
    ///
    /// Widgets should return true when their state has changed in a way
    /// that might affect styling (e.g., focus, hover, active states).
    fn is_dirty(&self) -> bool {
        false
    }

    fn mark_dirty(&mut self) {}

    fn mark_clean(&mut self) {}

    /// Handle a key event and optionally return a message.
    fn on_event(&mut self, _key: KeyCode) -> Option<M> {
        None
    }

    /// Sets the hover state on this widget.
    ///
    /// Returns true if this widget's hover state changed.
    fn set_hover(&mut self, _is_hovered: bool) -> bool {
        false
    }

    /// Returns true if this widget can receive focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Returns true if this widget is disabled (visible but non-interactive).
    fn is_disabled(&self) -> bool {
        false
    }

    /// Returns the widget's optional ID.
    fn id(&self) -> Option<&str> {
        None
    }

    /// Returns the widget's type name (e.g., "Link", "Typography").
    fn type_name(&self) -> &'static str {
        // Extract simple type name from full path
        let full = std::any::type_name::<Self>();
        full.split('<')
            .next()
            .unwrap_or(full)
            .split("::")
            .last()
            .unwrap_or(full)
    }
}
