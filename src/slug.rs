//! URL- and filesystem-safe slugs

/// [`slug_with`] using the conventional `-` separator, dropping any
/// extension dot
pub fn slug(s: &str) -> String {
    slug_with(s, '-', false)
}

/// Lowercase `s` and reduce it to a separator-joined slug.
///
/// Only ASCII alphanumerics survive (plus `.` when `keep_extension` is
/// set). Runs of whitespace and existing separators collapse into a single
/// `separator`; every other character is stripped without forcing one.
/// Leading and trailing separators are trimmed.
pub fn slug_with(s: &str, separator: char, keep_extension: bool) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_separator = false;

    for ch in s.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() || (keep_extension && ch == '.') {
            if pending_separator && !out.is_empty() {
                out.push(separator);
            }
            pending_separator = false;
            out.push(ch);
        } else if ch.is_whitespace() || ch == separator {
            pending_separator = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_basic() {
        assert_eq!(slug("My nEw post!!!"), "my-new-post");
    }

    #[test]
    fn test_slug_custom_separator() {
        assert_eq!(slug_with("My nEw post!!!", '_', false), "my_new_post");
    }

    #[test]
    fn test_slug_already_slugged() {
        assert_eq!(slug("my-new-post"), "my-new-post");
    }

    #[test]
    fn test_slug_drops_extension_dot() {
        assert_eq!(slug("An img name To convert.jpg"), "an-img-name-to-convertjpg");
    }

    #[test]
    fn test_slug_keeps_extension() {
        assert_eq!(
            slug_with("An img name To convert.jpg", '-', true),
            "an-img-name-to-convert.jpg"
        );
    }

    #[test]
    fn test_slug_trims_separators() {
        assert_eq!(slug("  spaced out  "), "spaced-out");
        assert_eq!(slug("---dashed---"), "dashed");
    }

    #[test]
    fn test_slug_empty() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("!!!"), "");
    }
}
