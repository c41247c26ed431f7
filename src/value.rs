//! Select value helpers.

/// The value held by a select: nothing, one option, or several.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectValue<T> {
    None,
    Single(T),
    /// Multi-select value; empty slots may appear while options are removed
    Multi(Vec<Option<T>>),
}

impl<T> Default for SelectValue<T> {
    fn default() -> Self {
        SelectValue::None
    }
}

impl<T> From<Option<T>> for SelectValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => SelectValue::Single(v),
            None => SelectValue::None,
        }
    }
}

/// Normalize a value into the list of selected options.
pub fn clean_value<T>(value: SelectValue<T>) -> Vec<T> {
    match value {
        SelectValue::Multi(values) => values.into_iter().flatten().collect(),
        SelectValue::Single(v) => vec![v],
        SelectValue::None => Vec::new(),
    }
}

/// Run the input-change hook. A returned string replaces the input; `None`
/// (or no hook) keeps it.
pub fn handle_input_change(
    input_value: &str,
    on_input_change: Option<&dyn Fn(&str) -> Option<String>>,
) -> String {
    on_input_change
        .and_then(|hook| hook(input_value))
        .unwrap_or_else(|| input_value.to_string())
}

/// Turn a label into a key-safe string: every non-word character becomes `-`.
pub fn to_key(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '-' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_multi_drops_empty() {
        let value = SelectValue::Multi(vec![Some("a"), None, Some("b")]);
        assert_eq!(clean_value(value), vec!["a", "b"]);
    }

    #[test]
    fn test_clean_single_and_none() {
        assert_eq!(clean_value(SelectValue::Single(3)), vec![3]);
        assert!(clean_value(SelectValue::<i32>::None).is_empty());
        assert_eq!(clean_value(SelectValue::from(Some('x'))), vec!['x']);
    }

    #[test]
    fn test_handle_input_change() {
        assert_eq!(handle_input_change("abc", None), "abc");

        let upper = |s: &str| Some(s.to_uppercase());
        assert_eq!(handle_input_change("abc", Some(&upper)), "ABC");

        let ignore = |_: &str| -> Option<String> { None };
        assert_eq!(handle_input_change("abc", Some(&ignore)), "abc");
    }

    #[test]
    fn test_to_key() {
        assert_eq!(to_key("New York, NY"), "New-York--NY");
        assert_eq!(to_key("snake_case-1"), "snake_case-1");
        assert_eq!(to_key("café"), "caf-");
    }
}
