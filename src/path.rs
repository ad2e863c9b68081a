//! Filename extension probing and path segmentation

/// The substring after the last `.` in `s`.
///
/// Returns the empty string when no dot exists, or when the only dot is
/// the leading character (dotfiles carry no extension). The *last* dot
/// always wins: `.An imgname.To-convert.blah` yields `blah`.
pub fn extension(s: &str) -> String {
    match s.rfind('.') {
        None | Some(0) => String::new(),
        Some(idx) => s[idx + 1..].to_string(),
    }
}

/// Non-empty `/`-separated segments of `path`, in order.
///
/// Empty segments produced by leading, trailing or duplicate slashes are
/// discarded.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_absent() {
        assert_eq!(extension("My nEw post!!!"), "");
    }

    #[test]
    fn test_extension_present() {
        assert_eq!(extension("An img name To convert.jpg"), "jpg");
    }

    #[test]
    fn test_extension_takes_last_dot() {
        assert_eq!(extension(".An imgname.To-convert.blah"), "blah");
    }

    #[test]
    fn test_extension_leading_dot_only() {
        assert_eq!(extension(".gitignore"), "");
    }

    #[test]
    fn test_segments() {
        assert_eq!(segments("a/path/of/words"), vec!["a", "path", "of", "words"]);
        assert_eq!(segments("/a/path/of/words/"), vec!["a", "path", "of", "words"]);
    }

    #[test]
    fn test_segments_collapses_duplicate_slashes() {
        assert_eq!(segments("a//b"), vec!["a", "b"]);
        assert!(segments("///").is_empty());
        assert!(segments("").is_empty());
    }
}
