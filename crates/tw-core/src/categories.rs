//! Built-in category names.
//!
//! These are always available to every owner, listed before owner-defined
//! categories, and can be neither added nor deleted.

pub const DEFAULT_CATEGORY: &str = "Work";

pub const BUILTIN_CATEGORIES: [&str; 5] = ["Work", "Errands", "Self-care", "Urgent", "Other"];

/// Exact-match check against the built-in set.
#[must_use]
pub fn is_builtin_category(name: &str) -> bool {
    BUILTIN_CATEGORIES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_category_is_builtin() {
        assert!(is_builtin_category(DEFAULT_CATEGORY));
    }

    #[test]
    fn builtin_check_is_exact() {
        assert!(is_builtin_category("Self-care"));
        assert!(!is_builtin_category("self-care"));
        assert!(!is_builtin_category("Groceries"));
    }
}
