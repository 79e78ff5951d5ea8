//! Country name translation providers.
//!
//! All providers answer the same three questions through
//! [`TranslationProvider`]:
//!
//! - which countries have data (`countries`)
//! - which languages a country has names in (`country_languages`)
//! - what a country is called in a language (`translate`)
//!
//! - `by_hand`: a small fixed dataset for Canada
//! - `json`: country records loaded from a JSON resource
//!
//! # Example
//!
//! ```rust
//! use country_translator::translator::{JsonTranslator, TranslationProvider};
//!
//! let translator = JsonTranslator::new()?;
//! assert_eq!(translator.translate("can", "de"), Some("Kanada"));
//! assert_eq!(translator.translate("can", "xx"), None);
//! # Ok::<(), country_translator::LoadError>(())
//! ```

mod by_hand;
mod json;

pub use by_hand::{ByHandTranslator, CANADA};
pub use json::{JsonTranslator, COUNTRY_CODE_FIELD, METADATA_FIELDS};

/// Read-only country name lookups.
///
/// Misses are never errors: unknown countries give an empty language list
/// and unknown pairs give `None`.
pub trait TranslationProvider: Send + Sync {
    /// Language codes available for `country`, in source order.
    ///
    /// Empty when the country is unknown. The returned `Vec` is a copy.
    fn country_languages(&self, country: &str) -> Vec<String>;

    /// Every country code this provider has names for.
    fn countries(&self) -> Vec<String>;

    /// Name of `country` in `language`, if one was loaded.
    fn translate(&self, country: &str, language: &str) -> Option<&str>;
}
