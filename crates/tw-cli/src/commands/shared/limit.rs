/// Pick the row limit: `--limit` on the subcommand, then the global flag,
/// then `general.default_limit`. A zero limit counts as unset.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local
        .filter(|limit| *limit > 0)
        .or_else(|| global.filter(|limit| *limit > 0))
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::effective_limit;

    #[rstest]
    #[case::local_wins(Some(5), Some(10), 5)]
    #[case::global_when_local_missing(None, Some(10), 10)]
    #[case::config_default(None, None, 50)]
    #[case::zero_local_ignored(Some(0), Some(10), 10)]
    #[case::zero_everywhere(Some(0), Some(0), 50)]
    fn limit_precedence(#[case] local: Option<u32>, #[case] global: Option<u32>, #[case] expected: u32) {
        assert_eq!(effective_limit(local, global, 50), expected);
    }
}
