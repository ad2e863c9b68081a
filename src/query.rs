//! Codepoint counting and substring predicates

/// Number of Unicode codepoints in `s` (not bytes)
pub fn length(s: &str) -> usize {
    s.chars().count()
}

/// Whether `s` begins with `needle`
pub fn starts_with(s: &str, needle: &str) -> bool {
    s.starts_with(needle)
}

/// Whether `s` ends with `needle`
pub fn ends_with(s: &str, needle: &str) -> bool {
    s.ends_with(needle)
}

/// Whether `needle` occurs anywhere in `s`
pub fn contains(s: &str, needle: &str) -> bool {
    s.contains(needle)
}

/// Ensure `s` ends with exactly one occurrence of `cap`.
///
/// Any existing trailing run of `cap` repetitions is stripped before the
/// single cap is appended. An empty `cap` leaves `s` unchanged.
pub fn finish(s: &str, cap: &str) -> String {
    if cap.is_empty() {
        return s.to_string();
    }

    let mut trimmed = s;
    while let Some(rest) = trimmed.strip_suffix(cap) {
        trimmed = rest;
    }

    format!("{trimmed}{cap}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_counts_codepoints() {
        assert_eq!(length("Taylor"), 6);
        assert_eq!(length("ラドクリフ"), 5);
        assert_eq!(length(""), 0);
    }

    #[test]
    fn test_starts_with() {
        assert!(starts_with("jason", "jas"));
        assert!(!starts_with("jason", "day"));
    }

    #[test]
    fn test_ends_with() {
        assert!(ends_with("jason", "on"));
        assert!(!ends_with("jason", "no"));
    }

    #[test]
    fn test_contains() {
        assert!(contains("taylor", "ylo"));
        assert!(!contains("taylor", "xxx"));
    }

    #[test]
    fn test_finish_appends_missing_cap() {
        assert_eq!(finish("test string", "/"), "test string/");
    }

    #[test]
    fn test_finish_collapses_trailing_runs() {
        assert_eq!(finish("test string/////", "/"), "test string/");
        assert_eq!(finish("test stringBAMBAM", "BAM"), "test stringBAM");
    }

    #[test]
    fn test_finish_empty_cap_is_identity() {
        assert_eq!(finish("test string", ""), "test string");
    }
}
