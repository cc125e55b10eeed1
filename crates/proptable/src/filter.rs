//! Row exclusion by bare or type-qualified property name.
//!
//! An exclusion entry is either a bare property name (`"onClick"`), which
//! hides that property on every type, or a qualified name
//! (`"Button.onClick"`), which hides it only when the inspected type's
//! display name is `Button`. Matching is exact string equality.

use crate::model::{PropertyDefinition, TypeDescriptor};

/// Returns the rows that survive the exclusion list, in their input order.
///
/// An empty exclusion list returns `rows` unchanged. Exclusions that match
/// nothing are ignored.
///
/// ```rust
/// use proptable::{filter_rows, PropertyDefinition, TypeDescriptor};
///
/// let rows = vec![
///     PropertyDefinition::new("label", "string"),
///     PropertyDefinition::new("onClick", "func"),
/// ];
/// let ty = TypeDescriptor::named("Button");
///
/// let kept = filter_rows(&rows, &["Button.onClick"], &ty);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].property, "label");
/// ```
pub fn filter_rows<'a, S: AsRef<str>>(
    rows: &'a [PropertyDefinition],
    exclusions: &[S],
    ty: &TypeDescriptor,
) -> Vec<&'a PropertyDefinition> {
    if exclusions.is_empty() {
        return rows.iter().collect();
    }

    let type_name = ty.display_name();
    rows.iter()
        .filter(|row| {
            let excluded = is_excluded(&row.property, type_name, exclusions);
            if excluded {
                tracing::trace!(property = %row.property, type_name, "property excluded");
            }
            !excluded
        })
        .collect()
}

/// Checks a property against the exclusion list.
///
/// The qualified form is compared piecewise so no `Type.prop` string is
/// built per row.
pub fn is_excluded<S: AsRef<str>>(property: &str, type_name: &str, exclusions: &[S]) -> bool {
    exclusions.iter().any(|entry| {
        let entry = entry.as_ref();
        entry == property || matches_qualified(entry, type_name, property)
    })
}

fn matches_qualified(entry: &str, type_name: &str, property: &str) -> bool {
    entry
        .strip_prefix(type_name)
        .and_then(|rest| rest.strip_prefix('.'))
        .is_some_and(|rest| rest == property)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<PropertyDefinition> {
        vec![
            PropertyDefinition::new("label", "string"),
            PropertyDefinition::new("onClick", "func"),
            PropertyDefinition::new("disabled", "bool"),
        ]
    }

    fn names(rows: &[&PropertyDefinition]) -> Vec<String> {
        rows.iter().map(|r| r.property.clone()).collect()
    }

    #[test]
    fn empty_exclusions_keep_everything() {
        let rows = rows();
        let none: [&str; 0] = [];
        let kept = filter_rows(&rows, &none, &TypeDescriptor::named("Button"));
        assert_eq!(names(&kept), vec!["label", "onClick", "disabled"]);
    }

    #[test]
    fn bare_name_excludes_on_any_type() {
        let rows = rows();
        let kept = filter_rows(&rows, &["onClick"], &TypeDescriptor::named("Anything"));
        assert_eq!(names(&kept), vec!["label", "disabled"]);
    }

    #[test]
    fn qualified_name_excludes_on_matching_type_only() {
        let rows = rows();
        let kept = filter_rows(&rows, &["Button.onClick"], &TypeDescriptor::named("Button"));
        assert_eq!(names(&kept), vec!["label", "disabled"]);

        let kept = filter_rows(&rows, &["Button.onClick"], &TypeDescriptor::named("Link"));
        assert_eq!(names(&kept), vec!["label", "onClick", "disabled"]);
    }

    #[test]
    fn qualified_name_uses_display_name() {
        let rows = rows();
        let ty = TypeDescriptor::named("Button").with_display_name("Primary");
        let kept = filter_rows(&rows, &["Button.label", "Primary.disabled"], &ty);
        assert_eq!(names(&kept), vec!["label", "onClick"]);
    }

    #[test]
    fn nameless_type_matches_leading_dot() {
        let rows = rows();
        let kept = filter_rows(&rows, &[".label"], &TypeDescriptor::default());
        assert_eq!(names(&kept), vec!["onClick", "disabled"]);
    }

    #[test]
    fn unknown_exclusions_are_ignored() {
        let rows = rows();
        let kept = filter_rows(&rows, &["nope", "Button.nope"], &TypeDescriptor::named("Button"));
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn exclusion_matching_is_exact() {
        assert!(!is_excluded("label", "Button", &["labe"]));
        assert!(!is_excluded("label", "Button", &["Button.labelx"]));
        assert!(!is_excluded("label", "Button", &["Buttonlabel"]));
        assert!(!is_excluded("label", "Button", &["button.label"]));
        assert!(is_excluded("label", "Button", &["Button.label"]));
    }

    #[test]
    fn dotted_type_names_qualify_correctly() {
        assert!(is_excluded("size", "ui.Button", &["ui.Button.size"]));
        assert!(!is_excluded("size", "ui", &["ui.Button.size"]));
    }
}
