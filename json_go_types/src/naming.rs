//! Identifier rules: root name validation, field display names and
//! derived type names.

use std::sync::LazyLock;

/// Field name used when a JSON key yields an empty display name.
pub const NOT_NAMED_FIELD: &str = "NotNamedField";

/// Type name used when a candidate type name is empty. Field-derived
/// candidates never are; only a direct [`TypeGraphBuilder::build`] call with
/// an empty candidate reaches it.
///
/// [`TypeGraphBuilder::build`]: crate::TypeGraphBuilder::build
pub const UNNAMED_TYPE: &str = "UnnamedType";

/// Suffix appended to a candidate name for the element type of an array of
/// objects.
pub const ITEM_SUFFIX: &str = "Item";

static IDENTIFIER: LazyLock<Option<regress::Regex>> =
    LazyLock::new(|| regress::Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").ok());

/// Returns true if `name` is usable as the root type name: a letter or
/// underscore followed by letters, digits or underscores.
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER
        .as_ref()
        .is_some_and(|re| re.find(name).is_some())
}

/// Uppercase the first character, leave the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a JSON key to a Go field name.
/// Splits on `_`, drops empty segments and capitalizes the first letter of
/// each remaining segment. The rest of each segment keeps its case.
/// Examples: `"first_name"` -> `"FirstName"`, `"__name"` -> `"Name"`, `"userID"` -> `"UserID"`
#[must_use]
pub fn to_display_name(json_key: &str) -> String {
    json_key
        .split('_')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

/// Type name for a candidate name: first letter capitalized, or
/// [`UNNAMED_TYPE`] when empty.
#[must_use]
pub fn to_type_name(candidate: &str) -> String {
    if candidate.is_empty() {
        UNNAMED_TYPE.to_string()
    } else {
        capitalize(candidate)
    }
}

/// Candidate name for the element type of an array named `candidate`.
#[must_use]
pub fn item_type_name(candidate: &str) -> String {
    format!("{candidate}{ITEM_SUFFIX}")
}

/// Candidate name with a numeric suffix, used when `base` is taken.
/// `attempt` 0 yields `base` itself, then `base2`, `base3`, ...
#[must_use]
pub fn numbered(base: &str, attempt: usize) -> String {
    if attempt == 0 {
        base.to_string()
    } else {
        format!("{base}{}", attempt + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_display_name_snake_case() {
        let actual: String = to_display_name("first_name");
        let expected: &str = "FirstName";
        assert_eq!(expected, actual);
    }

    #[test]
    fn to_display_name_trailing_underscores() {
        let actual: String = to_display_name("a_lot_of_____");
        let expected: &str = "ALotOf";
        assert_eq!(expected, actual);
    }

    #[test]
    fn to_display_name_leading_underscores() {
        let actual: String = to_display_name("__name");
        let expected: &str = "Name";
        assert_eq!(expected, actual);
    }

    #[test]
    fn to_display_name_keeps_inner_case() {
        assert_eq!("Input", to_display_name("input"));
        assert_eq!("Input", to_display_name("Input"));
        assert_eq!("UserID", to_display_name("userID"));
    }

    #[test]
    fn to_display_name_empty_and_separator_only() {
        assert_eq!("", to_display_name(""));
        assert_eq!("", to_display_name("___"));
    }

    #[test]
    fn to_display_name_non_ascii_first_letter() {
        let actual: String = to_display_name("élan_vital");
        let expected: &str = "ÉlanVital";
        assert_eq!(expected, actual);
    }

    #[test]
    fn to_type_name_capitalizes_or_falls_back() {
        assert_eq!("Out", to_type_name("out"));
        assert_eq!("TagsItem", to_type_name("TagsItem"));
        assert_eq!(UNNAMED_TYPE, to_type_name(""));
    }

    #[test]
    fn item_type_name_appends_suffix() {
        assert_eq!("TagsItem", item_type_name("Tags"));
    }

    #[test]
    fn numbered_suffixes_start_at_two() {
        assert_eq!("User", numbered("User", 0));
        assert_eq!("User2", numbered("User", 1));
        assert_eq!("User3", numbered("User", 2));
    }

    #[test]
    fn is_valid_identifier_accepts() {
        assert!(is_valid_identifier("Out"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("Name2"));
        assert!(is_valid_identifier("snake_case_name"));
    }

    #[test]
    fn is_valid_identifier_rejects() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1Name"));
        assert!(!is_valid_identifier("Name Name2"));
        assert!(!is_valid_identifier("Name$"));
        assert!(!is_valid_identifier("Name\n"));
    }
}
