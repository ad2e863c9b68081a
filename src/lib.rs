//! # stringkit - everyday string transformations
//!
//! Pure, stateless helpers for the text chores applications hit over and
//! over: slugging, casing conventions, truncation, word wrapping, ASCII
//! transliteration, path segmenting and random identifiers.
//!
//! Every operation takes borrowed UTF-8 text, mutates nothing, and
//! measures in Unicode codepoints rather than bytes. Nothing here is
//! fallible for valid text: degenerate inputs (empty strings, zero
//! limits) produce the minimal sensible output instead of an error.
//!
//! ## Usage
//!
//! ```
//! assert_eq!(stringkit::slug("My nEw post!!!"), "my-new-post");
//! assert_eq!(stringkit::title_case("TAYLOR beTteR TEsTer"), "Taylor Better Tester");
//! assert_eq!(stringkit::limit("Taylor", 3), "Tay...");
//! assert_eq!(stringkit::length("ラドクリフ"), 5);
//! assert_eq!(stringkit::finish("test string/////", "/"), "test string/");
//! assert_eq!(stringkit::segments("/a/path/of/words/"), ["a", "path", "of", "words"]);
//! ```
//!
//! Functions with a conventional default parameter come in pairs: the
//! short form uses the default (`limit` appends `"..."`, `slug` joins
//! with `-`) and the `_with` form takes the parameter explicitly.
//!
//! ## Pluralization
//!
//! Pluralization rules are deliberately not built in. Construct a
//! [`StringToolkit`] with any [`Pluralizer`] implementation to get a
//! facade carrying that capability alongside the transformations:
//!
//! ```
//! use stringkit::StringToolkit;
//!
//! let toolkit = StringToolkit::new(Box::new(|word: &str| format!("{word}s")));
//! assert_eq!(toolkit.plural("transformation"), "transformations");
//! assert_eq!(toolkit.camel_case("foo_bar", true), "FooBar");
//! ```

pub mod ascii;
pub mod case;
pub mod limit;
pub mod path;
pub mod query;
pub mod random;
pub mod slug;
pub mod toolkit;
pub mod wrap;

pub use ascii::ascii;
pub use case::{camel_case, lower, snake_case, snake_case_with, title_case, upper, upper_words};
pub use limit::{
    DEFAULT_SUFFIX, limit, limit_exact, limit_exact_with, limit_with, limit_words,
    limit_words_with,
};
pub use path::{extension, segments};
pub use query::{contains, ends_with, finish, length, starts_with};
pub use random::random;
pub use slug::{slug, slug_with};
pub use toolkit::{Pluralizer, StringToolkit};
pub use wrap::word_wrap;
