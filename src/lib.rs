//! Country name translation lookups.
//!
//! Give a country code and a language code, get the country's name in that
//! language. Providers implement [`TranslationProvider`]; the
//! [`LanguageCodeTable`] converts between language codes and display names
//! so callers can accept either.
//!
//! ```rust
//! use country_translator::{ByHandTranslator, LanguageCodeTable, TranslationProvider};
//!
//! let translator = ByHandTranslator::new();
//! let languages = LanguageCodeTable::new()?;
//!
//! let code = languages.from_language("German").unwrap_or("de");
//! assert_eq!(translator.translate("can", code), Some("Kanada"));
//! # Ok::<(), country_translator::LoadError>(())
//! ```

pub mod config;
pub mod error;
pub mod language_codes;
pub mod resource;
pub mod translator;

pub use error::LoadError;
pub use language_codes::LanguageCodeTable;
pub use resource::Resource;
pub use translator::{ByHandTranslator, JsonTranslator, TranslationProvider};
