//! Class names for styling component state.
//!
//! Every class is prefixed with the configured prefix (`react-select` by
//! default), so `menu` renders as `react-select__menu`, and a set state flag
//! `isMulti` on `menu-list` renders as `react-select__menu-list--isMulti`.

/// Default class prefix.
pub const DEFAULT_CLASS_PREFIX: &str = "react-select";

/// Argument to [`ClassNames::build`]: one base name, or a fixed list.
#[derive(Debug, Clone, Copy)]
pub enum ClassName<'a> {
    Single(&'a str),
    List(&'a [&'a str]),
}

impl<'a> From<&'a str> for ClassName<'a> {
    fn from(name: &'a str) -> Self {
        ClassName::Single(name)
    }
}

impl<'a> From<&'a [&'a str]> for ClassName<'a> {
    fn from(names: &'a [&'a str]) -> Self {
        ClassName::List(names)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for ClassName<'a> {
    fn from(names: &'a [&'a str; N]) -> Self {
        ClassName::List(names)
    }
}

/// Builds prefixed class names. The prefix is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    prefix: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self::new(DEFAULT_CLASS_PREFIX)
    }
}

impl ClassNames {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Build a class string.
    ///
    /// State flags only apply to a single base name; each set flag adds a
    /// `name--flag` modifier, in the order given. Lists ignore `state`.
    pub fn build<'a>(&self, name: impl Into<ClassName<'a>>, state: &[(&str, bool)]) -> String {
        let mut names: Vec<String> = Vec::new();
        match name.into() {
            ClassName::Single(base) => {
                names.push(base.to_string());
                names.extend(
                    state
                        .iter()
                        .filter(|(_, on)| *on)
                        .map(|(flag, _)| format!("{}--{}", base, flag)),
                );
            }
            ClassName::List(list) => names.extend(list.iter().map(|n| n.to_string())),
        }

        names
            .iter()
            .map(|n| format!("{}__{}", self.prefix, n))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_of_names() {
        let cn = ClassNames::default();
        assert_eq!(cn.build(&["a", "b"], &[]), "react-select__a react-select__b");
    }

    #[test]
    fn test_single_name_with_state() {
        let cn = ClassNames::default();
        assert_eq!(
            cn.build("a", &[("x", true), ("y", false)]),
            "react-select__a react-select__a--x"
        );
    }

    #[test]
    fn test_state_ignored_for_lists() {
        let cn = ClassNames::default();
        let names: &[&str] = &["a"];
        assert_eq!(cn.build(names, &[("x", true)]), "react-select__a");
    }

    #[test]
    fn test_custom_prefix() {
        let cn = ClassNames::new("picker");
        assert_eq!(cn.build("menu", &[]), "picker__menu");
        assert_eq!(cn.prefix(), "picker");
    }
}
