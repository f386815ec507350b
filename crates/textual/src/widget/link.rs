//! Accessible, themed link.
//!
//! A `Link` is [`Typography`] rendered inside an anchor (or any other
//! [`RootElement`]) with an underline policy and a palette color. It shows a
//! focus ring only when focus arrived from the keyboard, using a
//! [`FocusVisibilityTracker`] attached while the link is mounted.
//!
//! Always-underlined links draw their underline in a faded palette color,
//! carried to the element as the `--Link-underlineColor` custom property.
//!
//! Once unmounted, a link ignores focus and blur until it is mounted again.
//! A link that was never mounted has no tracker: it takes focus, but never
//! with a ring.
//!
//! # Example
//!
//! ```
//! use textual::activity::{ActivityMonitor, PushEvents};
//! use textual::event::{ActivityEvent, FocusEvent};
//! use textual::widget::link::Link;
//! use textual::{KeyCode, ThemeContext, Widget};
//! use tcss::{Theme, UnderlinePolicy};
//!
//! let theme = Theme::standard_themes().remove("material-light").unwrap();
//! let ctx = ThemeContext::with_monitor(theme, ActivityMonitor::new(PushEvents));
//!
//! let mut link: Link<()> = Link::new("Docs").with_underline(UnderlinePolicy::Always);
//! link.mount(&ctx).unwrap();
//!
//! ctx.monitor().dispatch(&ActivityEvent::key(KeyCode::Tab));
//! link.handle_focus(&FocusEvent::new());
//!
//! let node = link.render(&ctx).unwrap();
//! assert!(node.has_class("Link-focusVisible"));
//! assert_eq!(node.style["--Link-underlineColor"], "rgba(25, 118, 210, 0.4)");
//! ```

use std::collections::BTreeMap;
use std::rc::Rc;

use tcss::{
    ColorToken, RuleState, StyleRule, TextStyle, TypographyVariant, UnderlinePolicy, WidgetMeta,
    WidgetStates,
};

use crate::KeyCode;
use crate::classes::{ClassOverrides, compose_classes, merge_classes};
use crate::context::ThemeContext;
use crate::element::{Anchor, NodeRef, RootElement};
use crate::error::Result;
use crate::event::FocusEvent;
use crate::focus_visible::{Attachment, FocusVisibilityTracker};
use crate::widget::Widget;
use crate::widget::typography::{RenderedNode, Typography};

/// Custom property carrying the resolved underline color.
pub const UNDERLINE_COLOR_VAR: &str = "--Link-underlineColor";

type FocusHandler<M> = Box<dyn Fn(&FocusEvent) -> M>;

/// A styled, focus-aware hyperlink.
pub struct Link<M> {
    text: String,
    color: Option<ColorToken>,
    underline: Option<UnderlinePolicy>,
    variant: Option<TypographyVariant>,
    component: Rc<dyn RootElement>,
    id: Option<String>,
    classes: Vec<String>,
    class_overrides: ClassOverrides,
    typography_overrides: ClassOverrides,
    style: BTreeMap<String, String>,
    on_focus: Option<FocusHandler<M>>,
    on_blur: Option<FocusHandler<M>>,
    on_activate: Option<Box<dyn Fn() -> M>>,
    focused: bool,
    focus_visible: bool,
    hovered: bool,
    dirty: bool,
    node: Option<NodeRef>,
    attachment: Option<Attachment>,
    was_mounted: bool,
}

impl<M> Link<M> {
    /// Props left unset fall back to the theme's link defaults.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            underline: None,
            variant: None,
            component: Rc::new(Anchor),
            id: None,
            classes: Vec::new(),
            class_overrides: ClassOverrides::new(),
            typography_overrides: ClassOverrides::new(),
            style: BTreeMap::new(),
            on_focus: None,
            on_blur: None,
            on_activate: None,
            focused: false,
            focus_visible: false,
            hovered: false,
            dirty: true,
            node: None,
            attachment: None,
            was_mounted: false,
        }
    }

    pub fn with_color(mut self, color: ColorToken) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_underline(mut self, underline: UnderlinePolicy) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn with_variant(mut self, variant: TypographyVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Render as `component` instead of `<a>`.
    ///
    /// A mounted link is unmounted, as its node belongs to the old root.
    /// Mount again to track focus on the new one.
    pub fn with_component(mut self, component: impl RootElement + 'static) -> Self {
        if self.is_mounted() {
            self.unmount();
        }
        self.component = Rc::new(component);
        self
    }

    /// Set a unique ID for this link.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set CSS classes (space-separated).
    pub fn with_classes(mut self, classes: impl Into<String>) -> Self {
        self.classes = classes
            .into()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        self
    }

    /// Extra class emitted alongside a utility class, e.g. `("focusVisible", "ring")`.
    pub fn with_class_override(mut self, key: impl Into<String>, class: impl Into<String>) -> Self {
        self.class_overrides.insert(key.into(), class.into());
        self
    }

    /// Extra class for a slot of the inner typography, e.g. `("root", "prose")`.
    pub fn with_typography_class_override(
        mut self,
        key: impl Into<String>,
        class: impl Into<String>,
    ) -> Self {
        self.typography_overrides.insert(key.into(), class.into());
        self
    }

    /// Inline style property.
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    pub fn with_on_focus<F>(mut self, on_focus: F) -> Self
    where
        F: Fn(&FocusEvent) -> M + 'static,
    {
        self.on_focus = Some(Box::new(on_focus));
        self
    }

    pub fn with_on_blur<F>(mut self, on_blur: F) -> Self
    where
        F: Fn(&FocusEvent) -> M + 'static,
    {
        self.on_blur = Some(Box::new(on_blur));
        self
    }

    /// Message emitted when Enter is pressed on the focused link.
    pub fn with_on_activate<F>(mut self, on_activate: F) -> Self
    where
        F: Fn() -> M + 'static,
    {
        self.on_activate = Some(Box::new(on_activate));
        self
    }

    /// Creates the root node and starts focus tracking.
    ///
    /// Mounting an already mounted link remounts it.
    pub fn mount(&mut self, ctx: &ThemeContext) -> Result<()> {
        self.unmount();
        let node = self.component.create_node();
        self.attachment = Some(FocusVisibilityTracker::attach(ctx.monitor(), &node)?);
        log::debug!("link `{}` mounted as node {}", self.text, node.id());
        self.node = Some(node);
        self.was_mounted = true;
        self.dirty = true;
        Ok(())
    }

    /// Removes the node and stops focus tracking. Focus state is cleared.
    pub fn unmount(&mut self) {
        if let Some(node) = self.node.take() {
            node.unmount();
            log::debug!("link `{}` unmounted", self.text);
        }
        self.attachment = None;
        self.focused = false;
        self.focus_visible = false;
        self.hovered = false;
        self.dirty = true;
    }

    pub fn is_mounted(&self) -> bool {
        self.node.is_some()
    }

    pub fn node_ref(&self) -> Option<&NodeRef> {
        self.node.as_ref()
    }

    pub fn tracker(&self) -> Option<FocusVisibilityTracker> {
        self.attachment.as_ref().map(Attachment::tracker)
    }

    pub fn is_focus_visible(&self) -> bool {
        self.focus_visible
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Unmounted since the last mount; focus events no longer apply.
    fn is_stale(&self) -> bool {
        self.was_mounted && !self.node.as_ref().is_some_and(NodeRef::is_mounted)
    }

    /// Handles a native focus event.
    ///
    /// Returns the `on_focus` message. A stale link returns `None` and keeps
    /// its state.
    pub fn handle_focus(&mut self, event: &FocusEvent) -> Option<M> {
        if self.is_stale() {
            log::trace!("link `{}`: focus after unmount ignored", self.text);
            return None;
        }
        if let Some(tracker) = self.tracker() {
            tracker.on_focus(event);
            if tracker.is_visible() {
                self.focus_visible = true;
            }
        }
        self.focused = true;
        self.dirty = true;
        self.on_focus.as_ref().map(|on_focus| on_focus(event))
    }

    /// Handles a native blur event.
    pub fn handle_blur(&mut self, event: &FocusEvent) -> Option<M> {
        if self.is_stale() {
            log::trace!("link `{}`: blur after unmount ignored", self.text);
            return None;
        }
        if let Some(tracker) = self.tracker() {
            tracker.on_blur(event);
            if !tracker.is_visible() {
                self.focus_visible = false;
            }
        }
        self.focused = false;
        self.dirty = true;
        self.on_blur.as_ref().map(|on_blur| on_blur(event))
    }

    fn inline_style(&self, underline_color: Option<String>) -> BTreeMap<String, String> {
        let mut style = self.style.clone();
        if let Some(color) = underline_color {
            style.insert(UNDERLINE_COLOR_VAR.to_string(), color);
        }
        style
    }

    fn class_name(&self, underline: UnderlinePolicy, is_button: bool) -> String {
        let root = vec![
            Some("root"),
            Some(underline.class_key()),
            is_button.then_some("button"),
            self.focus_visible.then_some("focusVisible"),
        ];
        let mut slots = compose_classes(&[("root", root)], "Link", &self.class_overrides);
        let root = slots.remove("root").unwrap_or_default();
        merge_classes([root.as_str(), self.classes.join(" ").as_str()])
    }
}

/// Declarations for an underline policy and root element.
pub fn variant_rules(underline: UnderlinePolicy, has_underline_color: bool, is_button: bool) -> Vec<StyleRule> {
    let mut rules = Vec::new();
    match underline {
        UnderlinePolicy::None => rules.push(StyleRule::base("text-decoration", "none")),
        UnderlinePolicy::Hover => {
            rules.push(StyleRule::base("text-decoration", "none"));
            rules.push(StyleRule::new(RuleState::Hover, "text-decoration", "underline"));
        }
        UnderlinePolicy::Always => {
            rules.push(StyleRule::base("text-decoration", "underline"));
            rules.push(StyleRule::new(
                RuleState::Hover,
                "text-decoration-color",
                "inherit",
            ));
            if has_underline_color {
                rules.push(StyleRule::base(
                    "text-decoration-color",
                    format!("var({})", UNDERLINE_COLOR_VAR),
                ));
            }
        }
    }

    if is_button {
        rules.extend([
            StyleRule::base("position", "relative"),
            StyleRule::base("-webkit-tap-highlight-color", "transparent"),
            StyleRule::base("background-color", "transparent"),
            StyleRule::base("outline", "0"),
            StyleRule::base("border", "0"),
            StyleRule::base("margin", "0"),
            StyleRule::base("border-radius", "0"),
            StyleRule::base("padding", "0"),
            StyleRule::base("cursor", "pointer"),
            StyleRule::base("user-select", "none"),
            StyleRule::base("vertical-align", "middle"),
            StyleRule::base("-moz-appearance", "none"),
            StyleRule::base("-webkit-appearance", "none"),
            StyleRule::new(RuleState::InnerFocus, "border-style", "none"),
            StyleRule::new(RuleState::FocusVisible, "outline", "auto"),
        ]);
    }
    rules
}

impl<M> Widget<M> for Link<M> {
    fn render(&self, ctx: &ThemeContext) -> Result<RenderedNode> {
        let defaults = &ctx.theme().link;
        let color = defaults.color_for(self.color);
        let underline = defaults.underline_for(self.underline);
        let variant = defaults.variant_for(self.variant);
        let is_button = self.component.is_button();

        let decoration = ctx.resolve_decoration(color, underline)?;

        let rules = variant_rules(underline, decoration.is_some(), is_button);

        let text_style = TextStyle {
            underline: underline.is_underlined(self.hovered),
            ..TextStyle::default()
        };

        let mut typography = Typography::<M>::new(self.text.as_str())
            .with_variant(variant)
            .with_color(color)
            .with_component(Rc::clone(&self.component))
            .with_class_overrides(self.typography_overrides.clone())
            .with_classes(self.class_name(underline, is_button))
            .with_style(self.inline_style(decoration.map(|d| d.to_string())))
            .with_rules(rules)
            .with_text_style(text_style)
            .with_states(self.get_state());
        if let Some(id) = &self.id {
            typography = typography.with_id(id.as_str());
        }
        if let Some(node) = &self.node {
            typography = typography.with_node_ref(node.clone());
        }
        typography.render(ctx)
    }

    fn get_state(&self) -> WidgetStates {
        let mut states = WidgetStates::empty();
        if self.focused {
            states |= WidgetStates::FOCUS;
        }
        if self.focus_visible {
            states |= WidgetStates::FOCUS_VISIBLE;
        }
        if self.hovered {
            states |= WidgetStates::HOVER;
        }
        states
    }

    fn get_meta(&self) -> WidgetMeta {
        WidgetMeta {
            type_name: "Link",
            id: self.id.clone(),
            classes: self.classes.clone(),
            states: self.get_state(),
        }
    }

    fn set_focus(&mut self, is_focused: bool) {
        if is_focused == self.focused {
            return;
        }
        let event = FocusEvent::new();
        if is_focused {
            self.handle_focus(&event);
        } else {
            self.handle_blur(&event);
        }
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn on_event(&mut self, key: KeyCode) -> Option<M> {
        match key {
            KeyCode::Enter if self.focused => self.on_activate.as_ref().map(|f| f()),
            _ => None,
        }
    }

    fn set_hover(&mut self, is_hovered: bool) -> bool {
        if self.hovered == is_hovered {
            return false;
        }
        self.hovered = is_hovered;
        self.dirty = true;
        true
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn type_name(&self) -> &'static str {
        "Link"
    }
}
