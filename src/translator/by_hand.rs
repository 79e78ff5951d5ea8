//! Hand-written translations for a single country.

use super::TranslationProvider;

/// Country code of the only country this provider knows.
pub const CANADA: &str = "can";

/// Names of Canada, in declared order.
const CANADA_NAMES: &[(&str, &str)] = &[("de", "Kanada"), ("en", "Canada"), ("zh", "加拿大")];

/// Translator backed by a literal table for [`CANADA`]. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByHandTranslator;

impl ByHandTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl TranslationProvider for ByHandTranslator {
    fn country_languages(&self, country: &str) -> Vec<String> {
        if country != CANADA {
            return Vec::new();
        }
        CANADA_NAMES
            .iter()
            .map(|(language, _)| language.to_string())
            .collect()
    }

    fn countries(&self) -> Vec<String> {
        vec![CANADA.to_string()]
    }

    fn translate(&self, country: &str, language: &str) -> Option<&str> {
        if country != CANADA {
            return None;
        }
        CANADA_NAMES
            .iter()
            .find(|(code, _)| *code == language)
            .map(|(_, name)| *name)
    }
}
