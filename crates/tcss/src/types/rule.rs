//! State-scoped style declarations.
//!
//! Widgets describe their look as an ordered list of [`StyleRule`]s, each
//! scoped to a [`RuleState`]. [`computed_declarations`] folds the rules that
//! apply to a given set of [`WidgetStates`] into final property values.
//! State-scoped rules outrank base rules; within a tier later rules win.

use std::collections::BTreeMap;
use std::fmt;

use crate::states::WidgetStates;

/// Which widget state a rule is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleState {
    /// Always applies.
    Base,
    /// Applies while hovered.
    Hover,
    /// Applies while focused via keyboard.
    FocusVisible,
    /// Browser-internal focus box of button-like elements.
    InnerFocus,
}

impl RuleState {
    /// Nested selector form, e.g. `&:hover`.
    pub fn selector(self) -> &'static str {
        match self {
            Self::Base => "&",
            Self::Hover => "&:hover",
            Self::FocusVisible => "&:focus-visible",
            Self::InnerFocus => "&::-moz-focus-inner",
        }
    }

    /// Whether a rule with this scope applies to a widget in `states`.
    ///
    /// `InnerFocus` targets a pseudo-element and never applies to the widget itself.
    pub fn applies(self, states: WidgetStates) -> bool {
        match self {
            Self::Base => true,
            Self::Hover => states.contains(WidgetStates::HOVER),
            Self::FocusVisible => states.contains(WidgetStates::FOCUS_VISIBLE),
            Self::InnerFocus => false,
        }
    }
}

/// One property/value pair scoped to a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub state: RuleState,
    pub property: &'static str,
    pub value: String,
}

impl StyleRule {
    pub fn new(state: RuleState, property: &'static str, value: impl Into<String>) -> Self {
        Self {
            state,
            property,
            value: value.into(),
        }
    }

    pub fn base(property: &'static str, value: impl Into<String>) -> Self {
        Self::new(RuleState::Base, property, value)
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ {}: {} }}", self.state.selector(), self.property, self.value)
    }
}

/// Folds the rules applying to `states` into property values.
pub fn computed_declarations(rules: &[StyleRule], states: WidgetStates) -> BTreeMap<&'static str, String> {
    let (base, scoped): (Vec<&StyleRule>, Vec<&StyleRule>) = rules
        .iter()
        .filter(|rule| rule.state.applies(states))
        .partition(|rule| rule.state == RuleState::Base);

    let mut values = BTreeMap::new();
    for rule in base.into_iter().chain(scoped) {
        values.insert(rule.property, rule.value.clone());
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_rules_override_for_matching_states() {
        let rules = vec![
            StyleRule::base("text-decoration", "none"),
            StyleRule::new(RuleState::Hover, "text-decoration", "underline"),
            StyleRule::new(RuleState::InnerFocus, "border-style", "none"),
        ];

        let idle = computed_declarations(&rules, WidgetStates::empty());
        assert_eq!(idle["text-decoration"], "none");
        assert!(!idle.contains_key("border-style"));

        let hovered = computed_declarations(&rules, WidgetStates::HOVER);
        assert_eq!(hovered["text-decoration"], "underline");
    }

    #[test]
    fn scoped_rules_beat_later_base_rules() {
        let rules = vec![
            StyleRule::new(RuleState::Hover, "text-decoration-color", "inherit"),
            StyleRule::base("text-decoration-color", "var(--Link-underlineColor)"),
        ];
        assert_eq!(
            computed_declarations(&rules, WidgetStates::empty())["text-decoration-color"],
            "var(--Link-underlineColor)"
        );
        assert_eq!(
            computed_declarations(&rules, WidgetStates::HOVER)["text-decoration-color"],
            "inherit"
        );
    }

    #[test]
    fn display_uses_nested_selector() {
        let rule = StyleRule::new(RuleState::FocusVisible, "outline", "auto");
        assert_eq!(rule.to_string(), "&:focus-visible { outline: auto }");
    }
}
