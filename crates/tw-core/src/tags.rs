//! Tag normalization.
//!
//! Tags are stored with a leading `#`. Every path that writes, filters on, or
//! removes a tag goes through [`normalize_tag`], so `meeting`, ` #meeting `
//! and `#meeting` all name the same tag.

/// Trim `raw` and add the leading `#` when it is missing.
///
/// Returns `None` for a blank tag or a bare `#`.
#[must_use]
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed).trim_start();
    if body.is_empty() {
        return None;
    }
    Some(format!("#{body}"))
}

/// Normalize each tag, drop blanks, and remove duplicates keeping first occurrence.
#[must_use]
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let Some(tag) = normalize_tag(tag.as_ref()) else {
            continue;
        };
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{normalize_tag, normalize_tags};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::already_prefixed("#meeting", Some("#meeting"))]
    #[case::bare_word("shopping", Some("#shopping"))]
    #[case::padded(" #work ", Some("#work"))]
    #[case::padded_bare("  errand ", Some("#errand"))]
    #[case::empty("", None)]
    #[case::whitespace("   ", None)]
    #[case::hash_only("#", None)]
    #[case::hash_then_space(" # ", None)]
    fn single_tag(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(normalize_tag(raw).as_deref(), expected);
    }

    #[test]
    fn keeps_order_and_drops_duplicates() {
        let tags = normalize_tags(["#meeting", " #work ", "", "#meeting", "#focus"]);
        assert_eq!(tags, vec!["#meeting", "#work", "#focus"]);
    }

    #[test]
    fn prefixed_and_bare_spellings_collapse() {
        let tags = normalize_tags(["shopping", "#shopping", "#", "groceries"]);
        assert_eq!(tags, vec!["#shopping", "#groceries"]);
    }

    #[test]
    fn empty_input_yields_empty() {
        let tags = normalize_tags(Vec::<String>::new());
        assert!(tags.is_empty());
    }
}
