/// Interprets a caller-supplied limit for the unbounded listings.
///
/// `0` means no limit and a negative value is taken by magnitude, so `-5` behaves like `5`.
///
/// # Arguments
/// - `limit` - Raw limit from the query string
///
/// # Returns
/// - `None` - Return every matching row
/// - `Some(n)` - Return at most `n` rows
pub fn unbounded_limit(limit: i64) -> Option<u64> {
    match limit {
        0 => None,
        n => Some(n.unsigned_abs()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_disables_limit() {
        assert_eq!(unbounded_limit(0), None);
    }

    #[test]
    fn positive_limit_is_kept() {
        assert_eq!(unbounded_limit(12), Some(12));
        assert_eq!(unbounded_limit(5000), Some(5000));
    }

    #[test]
    fn negative_limit_uses_magnitude() {
        assert_eq!(unbounded_limit(-3), Some(3));
        assert_eq!(unbounded_limit(i64::MIN), Some(i64::MIN.unsigned_abs()));
    }
}
