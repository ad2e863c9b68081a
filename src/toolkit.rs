//! The toolkit facade and its injected pluralization capability

/// Converts a singular noun to its plural form.
///
/// The crate ships no implementation: pluralization rules are an external
/// concern supplied by the caller at construction time. Any
/// `Fn(&str) -> String` closure qualifies through the blanket impl.
pub trait Pluralizer: Send + Sync {
    fn pluralize(&self, word: &str) -> String;
}

impl<F> Pluralizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn pluralize(&self, word: &str) -> String {
        self(word)
    }
}

/// Stateless facade over the transformations in this crate.
///
/// Every method delegates to the corresponding free function; the only
/// state is the injected [`Pluralizer`], reached through
/// [`plural`](Self::plural). Construct one when callers want a single
/// value to pass around instead of importing functions individually.
///
/// ```
/// use stringkit::StringToolkit;
///
/// let toolkit = StringToolkit::new(Box::new(|word: &str| format!("{word}s")));
/// assert_eq!(toolkit.slug("My nEw post!!!"), "my-new-post");
/// assert_eq!(toolkit.plural("crate"), "crates");
/// ```
pub struct StringToolkit {
    pluralizer: Box<dyn Pluralizer>,
}

impl StringToolkit {
    pub fn new(pluralizer: Box<dyn Pluralizer>) -> Self {
        Self { pluralizer }
    }

    /// Plural form of `word`, delegated to the injected capability
    pub fn plural(&self, word: &str) -> String {
        self.pluralizer.pluralize(word)
    }

    /// See [`crate::length`]
    pub fn length(&self, s: &str) -> usize {
        crate::query::length(s)
    }

    /// See [`crate::lower`]
    pub fn lower(&self, s: &str) -> String {
        crate::case::lower(s)
    }

    /// See [`crate::upper`]
    pub fn upper(&self, s: &str) -> String {
        crate::case::upper(s)
    }

    /// See [`crate::upper_words`]
    pub fn upper_words(&self, s: &str) -> String {
        crate::case::upper_words(s)
    }

    /// See [`crate::title_case`]
    pub fn title_case(&self, s: &str) -> String {
        crate::case::title_case(s)
    }

    /// See [`crate::camel_case`]
    pub fn camel_case(&self, s: &str, upper_first: bool) -> String {
        crate::case::camel_case(s, upper_first)
    }

    /// See [`crate::snake_case`]
    pub fn snake_case(&self, s: &str) -> String {
        crate::case::snake_case(s)
    }

    /// See [`crate::snake_case_with`]
    pub fn snake_case_with(&self, s: &str, separator: char) -> String {
        crate::case::snake_case_with(s, separator)
    }

    /// See [`crate::limit`]
    pub fn limit(&self, s: &str, n: usize) -> String {
        crate::limit::limit(s, n)
    }

    /// See [`crate::limit_with`]
    pub fn limit_with(&self, s: &str, n: usize, suffix: &str) -> String {
        crate::limit::limit_with(s, n, suffix)
    }

    /// See [`crate::limit_exact`]
    pub fn limit_exact(&self, s: &str, n: usize) -> String {
        crate::limit::limit_exact(s, n)
    }

    /// See [`crate::limit_exact_with`]
    pub fn limit_exact_with(&self, s: &str, n: usize, suffix: &str) -> String {
        crate::limit::limit_exact_with(s, n, suffix)
    }

    /// See [`crate::limit_words`]
    pub fn limit_words(&self, s: &str, n: usize) -> String {
        crate::limit::limit_words(s, n)
    }

    /// See [`crate::limit_words_with`]
    pub fn limit_words_with(&self, s: &str, n: usize, suffix: &str) -> String {
        crate::limit::limit_words_with(s, n, suffix)
    }

    /// See [`crate::word_wrap`]
    pub fn word_wrap(&self, s: &str, width: usize) -> String {
        crate::wrap::word_wrap(s, width)
    }

    /// See [`crate::extension`]
    pub fn extension(&self, s: &str) -> String {
        crate::path::extension(s)
    }

    /// See [`crate::segments`]
    pub fn segments<'a>(&self, path: &'a str) -> Vec<&'a str> {
        crate::path::segments(path)
    }

    /// See [`crate::slug`]
    pub fn slug(&self, s: &str) -> String {
        crate::slug::slug(s)
    }

    /// See [`crate::slug_with`]
    pub fn slug_with(&self, s: &str, separator: char, keep_extension: bool) -> String {
        crate::slug::slug_with(s, separator, keep_extension)
    }

    /// See [`crate::ascii`]
    pub fn ascii(&self, s: &str) -> String {
        crate::ascii::ascii(s)
    }

    /// See [`crate::random`]
    pub fn random(&self, n: usize) -> String {
        crate::random::random(n)
    }

    /// See [`crate::starts_with`]
    pub fn starts_with(&self, s: &str, needle: &str) -> bool {
        crate::query::starts_with(s, needle)
    }

    /// See [`crate::ends_with`]
    pub fn ends_with(&self, s: &str, needle: &str) -> bool {
        crate::query::ends_with(s, needle)
    }

    /// See [`crate::contains`]
    pub fn contains(&self, s: &str, needle: &str) -> bool {
        crate::query::contains(s, needle)
    }

    /// See [`crate::finish`]
    pub fn finish(&self, s: &str, cap: &str) -> String {
        crate::query::finish(s, cap)
    }
}
