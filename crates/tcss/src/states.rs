//! Widget pseudo-class states and selector metadata.

use bitflags::bitflags;

bitflags! {
    /// Bitflags representing widget pseudo-class states.
    ///
    /// These states are used for matching pseudo-class selectors like
    /// `:focus`, `:hover`, and `:focus-visible`.
    ///
    /// # Example
    ///
    /// ```
    /// use tcss::WidgetStates;
    ///
    /// let mut states = WidgetStates::empty();
    /// states |= WidgetStates::FOCUS;
    /// states |= WidgetStates::FOCUS_VISIBLE;
    ///
    /// assert!(states.contains(WidgetStates::FOCUS));
    /// assert!(!states.contains(WidgetStates::HOVER));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WidgetStates: u16 {
        /// Widget has focus
        const FOCUS         = 0b0000_0001;
        /// Mouse is hovering over widget
        const HOVER         = 0b0000_0010;
        /// Widget is being actively pressed/clicked
        const ACTIVE        = 0b0000_0100;
        /// Widget is disabled and not interactive
        const DISABLED      = 0b0000_1000;
        /// Focus arrived via keyboard; a focus ring should show
        const FOCUS_VISIBLE = 0b0001_0000;
    }
}

/// Metadata about a widget used for selector matching.
#[derive(Clone, Debug, Default)]
pub struct WidgetMeta {
    /// The widget's type name (e.g., "Link", "Typography").
    pub type_name: &'static str,
    /// The widget's unique ID, if set.
    pub id: Option<String>,
    /// The widget's CSS classes.
    pub classes: Vec<String>,
    /// The widget's current pseudo-class states.
    pub states: WidgetStates,
}

impl WidgetMeta {
    /// Checks a pseudo-class name (without the leading `:`) against `states`.
    pub fn matches_pseudo_class(&self, name: &str) -> bool {
        match name {
            "focus" => self.states.contains(WidgetStates::FOCUS),
            "hover" => self.states.contains(WidgetStates::HOVER),
            "active" => self.states.contains(WidgetStates::ACTIVE),
            "disabled" => self.states.contains(WidgetStates::DISABLED),
            "focus-visible" => self.states.contains(WidgetStates::FOCUS_VISIBLE),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_visible_pseudo_class() {
        let meta = WidgetMeta {
            type_name: "Link",
            states: WidgetStates::FOCUS | WidgetStates::FOCUS_VISIBLE,
            ..Default::default()
        };
        assert!(meta.matches_pseudo_class("focus"));
        assert!(meta.matches_pseudo_class("focus-visible"));
        assert!(!meta.matches_pseudo_class("hover"));
        assert!(!meta.matches_pseudo_class("checked"));
    }
}
