//! Utility class composition.
//!
//! Widgets describe each styled slot as a list of class keys, some of them
//! conditional. [`compose_classes`] turns those into final class strings:
//! every present key becomes `{prefix}-{key}`, followed by any caller
//! override registered for the same key.
//!
//! ```
//! use std::collections::BTreeMap;
//! use textual::classes::compose_classes;
//!
//! let focus_visible = false;
//! let mut overrides = BTreeMap::new();
//! overrides.insert("root".to_string(), "nav-link".to_string());
//!
//! let classes = compose_classes(
//!     &[("root", vec![Some("root"), Some("underlineHover"), focus_visible.then_some("focusVisible")])],
//!     "Link",
//!     &overrides,
//! );
//! assert_eq!(classes["root"], "Link-root nav-link Link-underlineHover");
//! ```

use std::collections::BTreeMap;

/// Caller-supplied extra classes, keyed by class key.
pub type ClassOverrides = BTreeMap<String, String>;

/// Builds the class string for each slot.
pub fn compose_classes(
    slots: &[(&'static str, Vec<Option<&str>>)],
    prefix: &str,
    overrides: &ClassOverrides,
) -> BTreeMap<&'static str, String> {
    slots
        .iter()
        .map(|(slot, keys)| {
            let mut classes: Vec<String> = Vec::new();
            for key in keys.iter().flatten() {
                classes.push(format!("{}-{}", prefix, key));
                if let Some(extra) = overrides.get(*key).filter(|extra| !extra.is_empty()) {
                    classes.push(extra.clone());
                }
            }
            (*slot, classes.join(" "))
        })
        .collect()
}

/// Joins class lists, skipping empty entries.
pub fn merge_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_keys_are_skipped() {
        let classes = compose_classes(
            &[
                ("root", vec![Some("root"), None, Some("focusVisible")]),
                ("icon", vec![]),
            ],
            "Link",
            &ClassOverrides::new(),
        );
        assert_eq!(classes["root"], "Link-root Link-focusVisible");
        assert_eq!(classes["icon"], "");
    }

    #[test]
    fn overrides_follow_their_key() {
        let mut overrides = ClassOverrides::new();
        overrides.insert("focusVisible".into(), "ring".into());
        overrides.insert("button".into(), "unused".into());

        let classes = compose_classes(
            &[("root", vec![Some("root"), Some("focusVisible")])],
            "Link",
            &overrides,
        );
        assert_eq!(classes["root"], "Link-root Link-focusVisible ring");
    }

    #[test]
    fn merge_drops_blanks() {
        assert_eq!(merge_classes(["a b", "", "  c "]), "a b c");
    }
}
