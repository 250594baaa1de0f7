//! Type and name canonicalization.
//!
//! A union type such as `B | A` has two canonical renderings: a tight form
//! (`A|B`) used as an index key, and a spaced form (`A | B`) used wherever the
//! type is written into generated source. Both sort the union members so that
//! the same union authored in different orders normalizes identically.

/// Removes every whitespace character.
#[must_use]
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Returns the union members of a type, whitespace-free and sorted.
///
/// A type without `|` yields a single member.
#[must_use]
pub fn union_members(ty: &str) -> Vec<String> {
    let tight = strip_whitespace(ty);
    let mut members: Vec<String> = tight.split('|').map(str::to_string).collect();
    members.sort();
    members
}

/// Normalizes a type for emission (`B|A` becomes `A | B`).
///
/// Returns `None` when the type is blank.
#[must_use]
pub fn normalize_type(ty: &str) -> Option<String> {
    canonical(ty, " | ")
}

/// Normalizes a type into its index key (`B | A` becomes `A|B`).
///
/// Accepts both raw and already-normalized types.
#[must_use]
pub fn type_key(ty: &str) -> Option<String> {
    canonical(ty, "|")
}

/// Formats a name for use inside an identifier (`A | B` becomes `AOrB`).
///
/// Returns `None` when the name is blank.
#[must_use]
pub fn format_name(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    let mut out = String::with_capacity(name.len());
    for (i, part) in name.split('|').enumerate() {
        if i > 0 {
            out.truncate(out.trim_end().len());
            out.push_str("Or");
            out.push_str(part.trim_start());
        } else {
            out.push_str(part);
        }
    }
    Some(out)
}

fn canonical(ty: &str, separator: &str) -> Option<String> {
    if ty.trim().is_empty() {
        return None;
    }
    Some(union_members(ty).join(separator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace(" Syntax Kind\t\n"), "SyntaxKind");
    }

    #[test]
    fn test_union_members_sorted() {
        assert_eq!(union_members("C | A|B"), vec!["A", "B", "C"]);
        assert_eq!(union_members("Node"), vec!["Node"]);
    }

    #[test]
    fn test_union_canonicalization() {
        assert_eq!(normalize_type("B|A"), normalize_type("A|B"));
        assert_eq!(normalize_type("B|A").as_deref(), Some("A | B"));
        assert_eq!(type_key("B | A"), type_key("A|B"));
        assert_eq!(type_key("B | A").as_deref(), Some("A|B"));
    }

    #[test]
    fn test_type_key_of_normalized_type() {
        let spaced = normalize_type("Identifier|Expression").expect("non-empty");
        assert_eq!(type_key(&spaced).as_deref(), Some("Expression|Identifier"));
    }

    #[test]
    fn test_duplicate_members_keep_sort_order() {
        assert_eq!(normalize_type("B | A | A").as_deref(), Some("A | A | B"));
    }

    #[test]
    fn test_plain_type_unchanged() {
        assert_eq!(normalize_type("Identifier").as_deref(), Some("Identifier"));
        assert_eq!(normalize_type(" string ").as_deref(), Some("string"));
    }

    #[test]
    fn test_blank_type_is_absent() {
        assert_eq!(normalize_type(""), None);
        assert_eq!(normalize_type("  \t"), None);
        assert_eq!(type_key(""), None);
    }

    #[test]
    fn test_format_name() {
        assert_eq!(format_name("A|B").as_deref(), Some("AOrB"));
        assert_eq!(format_name("A | B").as_deref(), Some("AOrB"));
        assert_eq!(format_name("Identifier").as_deref(), Some("Identifier"));
        assert_eq!(format_name(""), None);
    }
}
