//! The item contract consumed by the picker.
//!
//! Any host type can be listed by implementing [`InfoItem`]; the picker
//! never constructs items itself, it only borrows the caller's slice.

// ============================================================================
// TRAIT
// ============================================================================

/// A value that can be shown in the picker.
///
/// Three views of one item: the string used for fuzzy filtering, the name
/// drawn in the list, and the long-form markdown shown in the detail view.
pub trait InfoItem {
    /// The string fuzzy matching runs against.
    fn filter_key(&self) -> String;

    /// The name displayed in the list row.
    fn display_name(&self) -> String;

    /// Markdown-formatted long-form content for the detail view.
    fn detail(&self) -> String;
}

// ============================================================================
// STRING ADAPTER
// ============================================================================

/// An [`InfoItem`] over a plain string: the value is its own filter key,
/// display name, and detail text. Useful when you just want to pick from a
/// list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringItem(pub String);

impl InfoItem for StringItem {
    fn filter_key(&self) -> String {
        self.0.clone()
    }

    fn display_name(&self) -> String {
        self.0.clone()
    }

    fn detail(&self) -> String {
        self.0.clone()
    }
}

impl From<&str> for StringItem {
    fn from(s: &str) -> Self {
        StringItem(s.to_string())
    }
}

impl From<String> for StringItem {
    fn from(s: String) -> Self {
        StringItem(s)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_item_echoes_its_value() {
        let item = StringItem::from("alpha");
        assert_eq!(item.filter_key(), "alpha");
        assert_eq!(item.display_name(), "alpha");
        assert_eq!(item.detail(), "alpha");
    }

    #[test]
    fn string_item_from_owned_string() {
        let item: StringItem = String::from("beta").into();
        assert_eq!(item.display_name(), "beta");
    }
}
