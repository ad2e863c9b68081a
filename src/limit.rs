//! Length-bounded truncation by codepoints and by words

/// Suffix appended by the short-form truncation helpers
pub const DEFAULT_SUFFIX: &str = "...";

/// [`limit_with`] using [`DEFAULT_SUFFIX`]
pub fn limit(s: &str, n: usize) -> String {
    limit_with(s, n, DEFAULT_SUFFIX)
}

/// Truncate to the first `n` codepoints and append `suffix`.
///
/// Strings of `n` codepoints or fewer are returned unchanged; otherwise the
/// result is `n + length(suffix)` codepoints long.
pub fn limit_with(s: &str, n: usize, suffix: &str) -> String {
    if s.chars().count() <= n {
        return s.to_string();
    }

    let mut out: String = s.chars().take(n).collect();
    out.push_str(suffix);
    out
}

/// [`limit_exact_with`] using [`DEFAULT_SUFFIX`]
pub fn limit_exact(s: &str, n: usize) -> String {
    limit_exact_with(s, n, DEFAULT_SUFFIX)
}

/// Truncate so the result is exactly `n` codepoints, with `suffix`
/// occupying the tail.
///
/// Strings of `n` codepoints or fewer are returned unchanged. A suffix
/// longer than `n` leaves no room for the original text.
pub fn limit_exact_with(s: &str, n: usize, suffix: &str) -> String {
    if s.chars().count() <= n {
        return s.to_string();
    }

    let keep = n.saturating_sub(suffix.chars().count());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(suffix);
    out
}

/// [`limit_words_with`] using [`DEFAULT_SUFFIX`]
pub fn limit_words(s: &str, n: usize) -> String {
    limit_words_with(s, n, DEFAULT_SUFFIX)
}

/// Keep only the first `n` whitespace-delimited words.
///
/// Inputs of `n` words or fewer are returned unchanged; otherwise the kept
/// words are joined with single spaces and `suffix` is appended directly,
/// without a separating space.
pub fn limit_words_with(s: &str, n: usize, suffix: &str) -> String {
    let words: Vec<&str> = s.split_whitespace().collect();
    if words.len() <= n {
        return s.to_string();
    }

    let mut out = words[..n].join(" ");
    out.push_str(suffix);
    out
}
