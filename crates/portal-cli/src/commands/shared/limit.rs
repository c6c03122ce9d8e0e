/// Compute effective limit with precedence: local arg -> global flag -> fallback.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// Keep at most `limit` rows.
pub fn apply_limit<T>(rows: &mut Vec<T>, limit: u32) {
    rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
}

#[cfg(test)]
mod tests {
    use super::{apply_limit, effective_limit};

    #[test]
    fn local_beats_global_beats_config() {
        assert_eq!(effective_limit(Some(5), Some(10), 20), 5);
        assert_eq!(effective_limit(None, Some(10), 20), 10);
        assert_eq!(effective_limit(None, None, 20), 20);
    }

    #[test]
    fn apply_limit_truncates_only_when_longer() {
        let mut rows = vec![1, 2, 3];
        apply_limit(&mut rows, 5);
        assert_eq!(rows, [1, 2, 3]);
        apply_limit(&mut rows, 2);
        assert_eq!(rows, [1, 2]);
    }
}
