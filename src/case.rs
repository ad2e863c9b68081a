//! Case transformations: whole-string folds, word capitalization and
//! identifier casing conventions

/// Lowercase every codepoint using the full Unicode case mapping
pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Uppercase every codepoint using the full Unicode case mapping
pub fn upper(s: &str) -> String {
    s.to_uppercase()
}

/// Uppercase the first character of every whitespace-delimited word.
///
/// The remaining characters of each word keep whatever case they already
/// had; use [`title_case`] for full normalization.
pub fn upper_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for ch in s.chars() {
        if ch.is_whitespace() {
            out.push(ch);
            at_word_start = true;
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }

    out
}

/// Normalize casing completely: lowercase each word, then uppercase its
/// first character.
///
/// Idempotent and insensitive to the input's casing, including for
/// non-ASCII leading letters.
pub fn title_case(s: &str) -> String {
    upper_words(&lower(s))
}

/// Join `_`- and `-`-separated segments into a single identifier,
/// capitalizing the first character of each segment.
///
/// With `upper_first` false the leading character of the result is
/// lowercased (camelCase rather than StudlyCase).
pub fn camel_case(s: &str, upper_first: bool) -> String {
    let mut out = String::with_capacity(s.len());

    for segment in s.split(['_', '-']) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars);
        }
    }

    if upper_first {
        return out;
    }

    let mut chars = out.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => out,
    }
}

/// [`snake_case_with`] using the conventional `_` separator
pub fn snake_case(s: &str) -> String {
    snake_case_with(s, '_')
}

/// Insert `separator` at each lowercase-to-uppercase boundary and fold the
/// whole string to lowercase
pub fn snake_case_with(s: &str, separator: char) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;

    for ch in s.chars() {
        if ch.is_uppercase() && prev_lower {
            out.push(separator);
        }
        prev_lower = ch.is_lowercase();
        out.extend(ch.to_lowercase());
    }

    out
}
