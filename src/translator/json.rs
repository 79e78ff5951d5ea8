//! Translations loaded from a JSON array of country records.
//!
//! Each record is a flat object such as
//! `{"id":124,"alpha2":"ca","alpha3":"can","en":"Canada","fr":"Canada"}`.
//! The `alpha3` value keys the country; every field that is not listed in
//! [`METADATA_FIELDS`] is a language code whose value is the country's name
//! in that language.

use super::TranslationProvider;
use crate::error::LoadError;
use crate::resource::{parse_records, Resource, DEFAULT_COUNTRY_RESOURCE};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Field holding the country code used as the lookup key.
pub const COUNTRY_CODE_FIELD: &str = "alpha3";

/// Record fields that identify the country and are never languages.
pub const METADATA_FIELDS: &[&str] = &["id", "alpha2", COUNTRY_CODE_FIELD];

/// Names of one country. `languages` and `names` always hold the same keys.
#[derive(Debug, Clone, Default)]
struct CountryNames {
    languages: Vec<String>,
    names: HashMap<String, String>,
}

/// Translator backed by country records read once at construction.
#[derive(Debug, Clone)]
pub struct JsonTranslator {
    countries: HashMap<String, CountryNames>,
}

impl JsonTranslator {
    /// Load the built-in sample resource.
    pub fn new() -> Result<Self, LoadError> {
        Self::from_name(DEFAULT_COUNTRY_RESOURCE, None)
    }

    /// Locate a resource by name (see [`Resource::locate`]) and load it.
    pub fn from_name(name: &str, search_dir: Option<&Path>) -> Result<Self, LoadError> {
        let resource = Resource::locate(name, search_dir)?;
        Self::from_resource(&resource)
    }

    /// Load translations from a resource.
    ///
    /// # Errors
    /// Fails if the resource cannot be read, is not an array of objects, or
    /// holds a record without a non-empty string country code, with an empty
    /// language field name, or with a non-string name. A record with no
    /// language fields is skipped.
    pub fn from_resource(resource: &Resource) -> Result<Self, LoadError> {
        let records: Vec<Map<String, Value>> = parse_records(resource)?;
        let mut countries = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            let index = position + 1;
            let invalid = |reason: String| LoadError::InvalidRecord {
                resource: resource.name().into_owned(),
                index,
                reason,
            };

            let country = match record.get(COUNTRY_CODE_FIELD) {
                Some(Value::String(code)) if code.is_empty() => {
                    return Err(invalid(format!("'{COUNTRY_CODE_FIELD}' is empty")))
                }
                Some(Value::String(code)) => code,
                Some(_) => return Err(invalid(format!("'{COUNTRY_CODE_FIELD}' is not a string"))),
                None => return Err(invalid(format!("missing '{COUNTRY_CODE_FIELD}'"))),
            };

            let mut entry = CountryNames::default();
            for (field, value) in record {
                if METADATA_FIELDS.contains(&field.as_str()) {
                    continue;
                }
                if field.is_empty() {
                    return Err(invalid("empty language code".to_string()));
                }
                let name = value.as_str().ok_or_else(|| {
                    invalid(format!("name for language '{field}' is not a string"))
                })?;
                entry.languages.push(field.clone());
                entry.names.insert(field.clone(), name.to_string());
            }

            if entry.languages.is_empty() {
                warn!(
                    "Skipping record #{} ('{}') in {}: no translations",
                    index,
                    country,
                    resource.name()
                );
                continue;
            }

            if countries.insert(country.clone(), entry).is_some() {
                warn!(
                    "Country '{}' appears more than once in {}; keeping record #{}",
                    country,
                    resource.name(),
                    index
                );
            }
        }

        info!(
            "Loaded translations for {} countries from {}",
            countries.len(),
            resource.name()
        );

        Ok(Self { countries })
    }

    /// Number of countries with translations.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl TranslationProvider for JsonTranslator {
    fn country_languages(&self, country: &str) -> Vec<String> {
        self.countries
            .get(country)
            .map(|entry| entry.languages.clone())
            .unwrap_or_default()
    }

    fn countries(&self) -> Vec<String> {
        self.countries.keys().cloned().collect()
    }

    fn translate(&self, country: &str, language: &str) -> Option<&str> {
        self.countries
            .get(country)?
            .names
            .get(language)
            .map(String::as_str)
    }
}
