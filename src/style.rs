//! Style declarations and per-component style overrides.

use std::collections::HashMap;
use std::fmt;

use select_layout::Placement;

/// An ordered list of CSS declarations. Setting a property twice replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a property.
    pub fn with(mut self, property: &str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Set a property, replacing any earlier value.
    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| p == property) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((property.to_string(), value)),
        }
    }

    /// Value of a property, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Remove a property.
    pub fn remove(&mut self, property: &str) {
        self.declarations.retain(|(p, _)| p != property);
    }

    /// Overlay `other` on top of this style.
    pub fn merge(mut self, other: &Style) -> Self {
        for (property, value) in &other.declarations {
            self.set(property, value.clone());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", property, value)?;
        }
        Ok(())
    }
}

/// Which component a style applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKey {
    Menu,
    MenuList,
    NoOptionsMessage,
    LoadingMessage,
}

/// Component state that styles may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleState {
    pub placement: Placement,
    pub max_height: Option<f32>,
    pub is_multi: bool,
}

type StyleFn = Box<dyn Fn(Style, &StyleState) -> Style>;

/// User overrides applied on top of the built-in styles.
#[derive(Default)]
pub struct Styles {
    overrides: HashMap<StyleKey, StyleFn>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an override for a component. It receives the built-in style
    /// and returns the style to use.
    pub fn set<F>(mut self, key: StyleKey, f: F) -> Self
    where
        F: Fn(Style, &StyleState) -> Style + 'static,
    {
        self.overrides.insert(key, Box::new(f));
        self
    }

    /// Final style for a component.
    pub fn get(&self, key: StyleKey, state: &StyleState, base: Style) -> Style {
        match self.overrides.get(&key) {
            Some(f) => f(base, state),
            None => base,
        }
    }
}

impl fmt::Debug for Styles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Styles")
            .field("overrides", &self.overrides.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let style = Style::new()
            .with("color", "red")
            .with("margin", "0")
            .with("color", "blue");
        assert_eq!(style.get("color"), Some("blue"));
        assert_eq!(style.to_string(), "color: blue; margin: 0;");
    }

    #[test]
    fn test_merge_and_remove() {
        let mut merged = Style::new()
            .with("color", "red")
            .merge(&Style::new().with("color", "green").with("z-index", "2"));
        assert_eq!(merged.get("color"), Some("green"));
        merged.remove("color");
        assert_eq!(merged.get("color"), None);
        assert_eq!(merged.get("z-index"), Some("2"));
    }

    #[test]
    fn test_override_applied_only_to_its_key() {
        let styles = Styles::new().set(StyleKey::Menu, |base, state| {
            base.with("z-index", if state.placement == Placement::Top { "3" } else { "2" })
        });
        let state = StyleState {
            placement: Placement::Top,
            ..StyleState::default()
        };
        let menu = styles.get(StyleKey::Menu, &state, Style::new().with("z-index", "1"));
        assert_eq!(menu.get("z-index"), Some("3"));
        let list = styles.get(StyleKey::MenuList, &state, Style::new().with("z-index", "1"));
        assert_eq!(list.get("z-index"), Some("1"));
    }
}
