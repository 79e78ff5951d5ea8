//! Language code table: converts between language codes and display names.
//!
//! Loaded once from a tab-separated resource whose first column holds one
//! or more names joined by `", "` and whose second column holds the code.
//! The whole first column is kept as the display name for the code, while
//! each alias on its own resolves back to the code.

use crate::error::LoadError;
use crate::resource::{data_rows, Resource, DEFAULT_LANGUAGE_RESOURCE};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Separator between aliases in the name column.
const ALIAS_SEPARATOR: &str = ", ";

/// Bidirectional language code ↔ language name table.
#[derive(Debug, Clone, Default)]
pub struct LanguageCodeTable {
    code_name: HashMap<String, String>,
    name_code: HashMap<String, String>,
}

impl LanguageCodeTable {
    /// Load the built-in language code resource.
    pub fn new() -> Result<Self, LoadError> {
        Self::from_name(DEFAULT_LANGUAGE_RESOURCE, None)
    }

    /// Locate a resource by name (see [`Resource::locate`]) and load it.
    pub fn from_name(name: &str, search_dir: Option<&Path>) -> Result<Self, LoadError> {
        let resource = Resource::locate(name, search_dir)?;
        Self::from_resource(&resource)
    }

    /// Load the table from a resource.
    ///
    /// # Errors
    /// Fails if the resource cannot be read or a data row has fewer than two
    /// fields. A resource with no data rows yields an empty table.
    pub fn from_resource(resource: &Resource) -> Result<Self, LoadError> {
        let text = resource.read()?;
        let mut table = Self::default();

        for (line, fields) in data_rows(&text) {
            let (names, code) = match fields.as_slice() {
                [names, code, ..] if !code.is_empty() => (*names, *code),
                _ => {
                    return Err(LoadError::Malformed {
                        resource: resource.name().into_owned(),
                        line,
                        reason: format!(
                            "expected '<names>\\t<code>', found {} field(s)",
                            fields.len()
                        ),
                    })
                }
            };

            table.code_name.insert(code.to_string(), names.to_string());
            for alias in names.split(ALIAS_SEPARATOR).filter(|a| !a.is_empty()) {
                let previous = table.name_code.insert(alias.to_string(), code.to_string());
                if let Some(previous) = previous {
                    if previous != code {
                        debug!(
                            "Alias '{}' moved from '{}' to '{}' (line {})",
                            alias, previous, code, line
                        );
                    }
                }
            }
        }

        info!(
            "Loaded {} languages ({} names) from {}",
            table.code_name.len(),
            table.name_code.len(),
            resource.name()
        );

        Ok(table)
    }

    /// Display name for a language code, exactly as written in the resource.
    pub fn from_language_code(&self, code: &str) -> Option<&str> {
        self.code_name.get(code).map(String::as_str)
    }

    /// Code for a language name or alias. Matching is exact.
    pub fn from_language(&self, name: &str) -> Option<&str> {
        self.name_code.get(name).map(String::as_str)
    }

    /// Number of distinct language codes (aliases are not counted).
    pub fn num_languages(&self) -> usize {
        self.code_name.len()
    }

    /// All known language codes, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.code_name.keys().map(String::as_str)
    }
}
