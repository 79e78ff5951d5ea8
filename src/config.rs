use crate::language_codes::LanguageCodeTable;
use crate::resource::{DEFAULT_COUNTRY_RESOURCE, DEFAULT_LANGUAGE_RESOURCE};
use crate::translator::{ByHandTranslator, JsonTranslator, TranslationProvider};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Which translation provider to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Json,
    ByHand,
}

impl ProviderKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "json" | "file" => Some(ProviderKind::Json),
            "by-hand" | "hand" | "static" => Some(ProviderKind::ByHand),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Provider
    pub provider: ProviderKind,

    // Resources
    pub country_resource: String,
    pub language_resource: String,
    pub resource_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Json,
            country_resource: DEFAULT_COUNTRY_RESOURCE.to_string(),
            language_resource: DEFAULT_LANGUAGE_RESOURCE.to_string(),
            resource_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let provider = match std::env::var("TRANSLATOR_PROVIDER") {
            Ok(value) => match ProviderKind::parse(&value) {
                Some(kind) => kind,
                None => bail!("TRANSLATOR_PROVIDER has unknown value '{}'", value),
            },
            Err(_) => ProviderKind::Json,
        };

        Ok(Self {
            provider,

            // Resources
            country_resource: std::env::var("TRANSLATOR_COUNTRY_RESOURCE")
                .unwrap_or_else(|_| DEFAULT_COUNTRY_RESOURCE.to_string()),
            language_resource: std::env::var("TRANSLATOR_LANGUAGE_RESOURCE")
                .unwrap_or_else(|_| DEFAULT_LANGUAGE_RESOURCE.to_string()),
            resource_dir: std::env::var("TRANSLATOR_RESOURCE_DIR")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Construct the configured translation provider.
    pub fn build_provider(&self) -> Result<Box<dyn TranslationProvider>> {
        match self.provider {
            ProviderKind::ByHand => Ok(Box::new(ByHandTranslator::new())),
            ProviderKind::Json => {
                let translator =
                    JsonTranslator::from_name(&self.country_resource, self.resource_dir.as_deref())
                        .context("Failed to load country translations")?;
                Ok(Box::new(translator))
            }
        }
    }

    /// Construct the language code table.
    pub fn build_language_table(&self) -> Result<LanguageCodeTable> {
        LanguageCodeTable::from_name(&self.language_resource, self.resource_dir.as_deref())
            .context("Failed to load language codes")
    }
}
