//! Width-constrained re-flow of free text

/// Re-flow `s` so no piece exceeds `width` codepoints.
///
/// The text is broken at existing whitespace where possible; any single
/// token longer than `width` is hard-chunked at `width`-codepoint
/// boundaries. All resulting pieces are rejoined with single spaces, so
/// runs of whitespace in the input collapse.
///
/// A `width` of zero returns `s` unchanged.
pub fn word_wrap(s: &str, width: usize) -> String {
    if width == 0 {
        return s.to_string();
    }

    let mut pieces: Vec<String> = Vec::new();
    for token in s.split_whitespace() {
        let chars: Vec<char> = token.chars().collect();
        for chunk in chars.chunks(width) {
            pieces.push(chunk.iter().collect());
        }
    }

    pieces.join(" ")
}
