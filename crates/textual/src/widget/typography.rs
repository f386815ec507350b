//! Styled text primitive.
//!
//! `Typography` renders a run of text at a [`TypographyVariant`], inside a
//! root element chosen by the caller. Higher-level widgets (like
//! [`Link`](super::link::Link)) build on it by passing extra classes, inline
//! style, state-scoped rules and a node reference to forward.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::marker::PhantomData;
use std::rc::Rc;

use tcss::{
    ColorToken, RuleState, StyleRule, TextStyle, TypographyVariant, WidgetStates,
    types::computed_declarations,
};

use crate::classes::{ClassOverrides, compose_classes};
use crate::context::ThemeContext;
use crate::element::{CustomElement, NodeRef, RootElement};
use crate::error::Result;
use crate::widget::Widget;

/// Element a variant renders as when no component is given.
pub fn variant_tag(variant: TypographyVariant) -> &'static str {
    match variant {
        TypographyVariant::H1 => "h1",
        TypographyVariant::H2 => "h2",
        TypographyVariant::H3 => "h3",
        TypographyVariant::H4 => "h4",
        TypographyVariant::H5 => "h5",
        TypographyVariant::H6 | TypographyVariant::Subtitle1 | TypographyVariant::Subtitle2 => "h6",
        TypographyVariant::Body1 | TypographyVariant::Body2 | TypographyVariant::Inherit => "p",
        TypographyVariant::Button | TypographyVariant::Caption | TypographyVariant::Overline => {
            "span"
        }
    }
}

/// Output of rendering a text primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNode {
    pub tag: String,
    /// Forwarded reference to the mounted node, if any.
    pub node: Option<NodeRef>,
    pub id: Option<String>,
    pub text: String,
    pub classes: Vec<String>,
    /// Inline style, including custom properties.
    pub style: BTreeMap<String, String>,
    pub rules: Vec<StyleRule>,
    pub text_style: TextStyle,
    pub states: WidgetStates,
}

impl RenderedNode {
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Property values in effect for the node's current states.
    pub fn computed(&self) -> BTreeMap<&'static str, String> {
        computed_declarations(&self.rules, self.states)
    }

    /// Snapshot-friendly text form.
    pub fn to_text(&self) -> String {
        let mut out = format!("<{}", self.tag);
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{}\"", id);
        }
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", self.class_name());
        }
        if !self.style.is_empty() {
            let style: Vec<String> = self
                .style
                .iter()
                .map(|(property, value)| format!("{}: {}", property, value))
                .collect();
            let _ = write!(out, " style=\"{}\"", style.join("; "));
        }
        let _ = writeln!(out, ">{}</{}>", self.text, self.tag);
        for rule in &self.rules {
            let _ = writeln!(out, "  {}", rule);
        }
        let _ = write!(out, "  text-style: {}", self.text_style);
        out
    }
}

/// A run of styled text.
pub struct Typography<M> {
    text: String,
    variant: TypographyVariant,
    component: Option<Rc<dyn RootElement>>,
    color: Option<ColorToken>,
    id: Option<String>,
    classes: Vec<String>,
    class_overrides: ClassOverrides,
    style: BTreeMap<String, String>,
    rules: Vec<StyleRule>,
    text_style: TextStyle,
    node: Option<NodeRef>,
    states: WidgetStates,
    dirty: bool,
    _phantom: PhantomData<M>,
}

impl<M> Typography<M> {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: TypographyVariant::default(),
            component: None,
            color: None,
            id: None,
            classes: Vec::new(),
            class_overrides: ClassOverrides::new(),
            style: BTreeMap::new(),
            rules: Vec::new(),
            text_style: TextStyle::default(),
            node: None,
            states: WidgetStates::empty(),
            dirty: true,
            _phantom: PhantomData,
        }
    }

    pub fn with_variant(mut self, variant: TypographyVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Render as `component` instead of the variant's default element.
    pub fn with_component(mut self, component: Rc<dyn RootElement>) -> Self {
        self.component = Some(component);
        self
    }

    /// Text color from the theme palette.
    pub fn with_color(mut self, color: ColorToken) -> Self {
        self.color = Some(color);
        self
    }

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

    /// Extra classes keyed by utility class key (`root` or the variant name).
    pub fn with_class_overrides(mut self, overrides: ClassOverrides) -> Self {
        self.class_overrides = overrides;
        self
    }

    pub fn with_style(mut self, style: BTreeMap<String, String>) -> Self {
        self.style = style;
        self
    }

    pub fn with_rules(mut self, rules: Vec<StyleRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    /// Forward `node` as the rendered node's reference.
    pub fn with_node_ref(mut self, node: NodeRef) -> Self {
        self.node = Some(node);
        self
    }

    pub fn with_states(mut self, states: WidgetStates) -> Self {
        self.states = states;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn variant(&self) -> TypographyVariant {
        self.variant
    }

    fn tag(&self) -> String {
        match &self.component {
            Some(component) => component.tag().to_string(),
            None => variant_tag(self.variant).to_string(),
        }
    }
}

impl<M> Widget<M> for Typography<M> {
    fn render(&self, ctx: &ThemeContext) -> Result<RenderedNode> {
        let root = vec![Some("root"), Some(self.variant.name())];
        let mut slots = compose_classes(&[("root", root)], "Typography", &self.class_overrides);
        let mut classes: Vec<String> = slots
            .remove("root")
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        classes.extend(self.classes.iter().cloned());

        let mut rules = vec![StyleRule::base("margin", "0")];
        if let Some(color) = self.color {
            if let Some(value) = ctx.text_color(color)? {
                rules.push(StyleRule::new(RuleState::Base, "color", value));
            }
        }
        rules.extend(self.rules.iter().cloned());

        let mut text_style = self.variant.text_style();
        text_style.merge(self.text_style);

        Ok(RenderedNode {
            tag: self.tag(),
            node: self.node.clone(),
            id: self.id.clone(),
            text: self.text.clone(),
            classes,
            style: self.style.clone(),
            rules,
            text_style,
            states: self.states,
        })
    }

    fn get_state(&self) -> WidgetStates {
        self.states
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

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn type_name(&self) -> &'static str {
        "Typography"
    }
}

/// A component given by name, e.g. a router's link type.
pub fn component(name: &str) -> Rc<dyn RootElement> {
    Rc::new(CustomElement::new(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{ActivityMonitor, PushEvents};
    use tcss::Theme;

    fn ctx() -> ThemeContext {
        ThemeContext::with_monitor(
            Theme::standard_themes().remove("material-light").unwrap(),
            ActivityMonitor::new(PushEvents),
        )
    }

    #[test]
    fn variant_picks_tag_and_class() {
        let text: Typography<()> = Typography::new("Title").with_variant(TypographyVariant::H2);
        let node = text.render(&ctx()).unwrap();
        assert_eq!(node.tag, "h2");
        assert_eq!(node.class_name(), "Typography-root Typography-h2");
        assert!(node.text_style.bold);
    }

    #[test]
    fn component_overrides_tag() {
        let text: Typography<()> = Typography::new("Home")
            .with_variant(TypographyVariant::Body2)
            .with_component(component("RouterLink"))
            .with_classes("nav  primary");
        let node = text.render(&ctx()).unwrap();
        assert_eq!(node.tag, "RouterLink");
        assert!(node.has_class("Typography-body2"));
        assert!(node.has_class("nav"));
        assert_eq!(node.classes.len(), 4);
    }

    #[test]
    fn palette_color_becomes_a_rule() {
        let text: Typography<()> = Typography::new("Hi").with_color(ColorToken::Primary);
        let node = text.render(&ctx()).unwrap();
        assert_eq!(node.computed()["color"], "#1976d2");

        let inherit: Typography<()> = Typography::new("Hi").with_color(ColorToken::Inherit);
        assert!(!inherit.render(&ctx()).unwrap().computed().contains_key("color"));
    }

    #[test]
    fn class_overrides_follow_their_key() {
        let mut overrides = ClassOverrides::new();
        overrides.insert("h2".into(), "headline".into());
        overrides.insert("root".into(), "prose".into());
        let text: Typography<()> = Typography::new("Title")
            .with_variant(TypographyVariant::H2)
            .with_class_overrides(overrides)
            .with_classes("extra");

        let node = text.render(&ctx()).unwrap();
        assert_eq!(
            node.class_name(),
            "Typography-root prose Typography-h2 headline extra"
        );
    }

    #[test]
    fn forwards_node_ref() {
        let node = NodeRef::new("p", Default::default());
        let text: Typography<()> = Typography::new("Hi").with_node_ref(node.clone());
        assert_eq!(text.render(&ctx()).unwrap().node, Some(node));
    }

    #[test]
    fn snapshot_text() {
        let text: Typography<()> = Typography::new("Note")
            .with_variant(TypographyVariant::Caption)
            .with_id("note");
        insta::assert_snapshot!(text.render(&ctx()).unwrap().to_text(), @r###"
        <span id="note" class="Typography-root Typography-caption">Note</span>
          & { margin: 0 }
          text-style: dim
        "###);
    }
}
