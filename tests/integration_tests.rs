//! Integration tests for the country translator
//!
//! These tests exercise the public API the way a caller would: providers
//! behind the shared trait, resources on disk, and language names resolved
//! to codes before translating.

use std::collections::{BTreeMap, HashMap};

use proptest::prelude::*;
use serde_json::{Map, Value};
use tempfile::TempDir;

use country_translator::translator::METADATA_FIELDS;
use country_translator::{
    ByHandTranslator, JsonTranslator, LanguageCodeTable, LoadError, Resource, TranslationProvider,
};

// ==================== Test Helpers ====================

/// Build a country resource from `alpha3 -> (language -> name)`.
fn country_json(countries: &BTreeMap<String, BTreeMap<String, String>>) -> String {
    let records: Vec<Value> = countries
        .iter()
        .enumerate()
        .map(|(id, (alpha3, names))| {
            let mut record = Map::new();
            record.insert("id".to_string(), Value::from(id));
            record.insert("alpha2".to_string(), Value::from(&alpha3[..2]));
            record.insert("alpha3".to_string(), Value::from(alpha3.as_str()));
            for (language, name) in names {
                record.insert(language.clone(), Value::from(name.as_str()));
            }
            Value::Object(record)
        })
        .collect();
    serde_json::to_string(&records).expect("Failed to serialize records")
}

/// Check the lookup invariants every provider must satisfy.
fn assert_provider_consistent(provider: &dyn TranslationProvider) {
    for country in provider.countries() {
        let languages = provider.country_languages(&country);
        assert!(!languages.is_empty(), "{country} has no languages");
        for language in &languages {
            assert!(
                provider.translate(&country, language).is_some(),
                "{country}/{language} listed but not translatable"
            );
        }
    }
}

// ==================== Provider Scenario Tests ====================

#[test]
fn test_by_hand_scenario() {
    let provider: Box<dyn TranslationProvider> = Box::new(ByHandTranslator::new());

    assert_eq!(provider.countries(), vec!["can"]);
    assert_eq!(provider.country_languages("can"), vec!["de", "en", "zh"]);
    assert_eq!(provider.translate("can", "en"), Some("Canada"));
    assert_eq!(provider.translate("can", "fr"), None);
    assert_eq!(provider.translate("mex", "en"), None);
    assert_provider_consistent(&*provider);
}

#[test]
fn test_json_scenario_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(
        temp_dir.path().join("canada.json"),
        r#"[{"id":1,"alpha2":"ca","alpha3":"can","en":"Canada","fr":"Canada"}]"#,
    )
    .expect("Failed to write resource");

    let provider = JsonTranslator::from_name("canada.json", Some(temp_dir.path()))
        .expect("Should load from resource dir");

    assert_eq!(provider.country_languages("can"), vec!["en", "fr"]);
    assert_eq!(provider.translate("can", "fr"), Some("Canada"));
    assert_eq!(provider.translate("can", "de"), None);
}

#[test]
fn test_builtin_sample_is_consistent() {
    let provider = JsonTranslator::new().expect("Built-in resource should load");
    assert_provider_consistent(&provider);

    for country in provider.countries() {
        for field in METADATA_FIELDS {
            assert!(!provider.country_languages(&country).iter().any(|l| l == field));
        }
    }
}

#[test]
fn test_providers_are_interchangeable() {
    let providers: Vec<Box<dyn TranslationProvider>> = vec![
        Box::new(ByHandTranslator::new()),
        Box::new(JsonTranslator::new().expect("Built-in resource should load")),
    ];

    for provider in &providers {
        assert_eq!(provider.translate("can", "de"), Some("Kanada"));
        assert_eq!(provider.translate("can", "zh"), Some("加拿大"));
        assert!(provider.country_languages("zzz").is_empty());
    }
}

#[test]
fn test_providers_shared_across_threads() {
    let provider = std::sync::Arc::new(JsonTranslator::new().expect("Should load"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let provider = std::sync::Arc::clone(&provider);
            std::thread::spawn(move || provider.translate("fra", "de").map(str::to_string))
        })
        .collect();

    for handle in handles {
        let name = handle.join().expect("Thread panicked");
        assert_eq!(name.as_deref(), Some("Frankreich"));
    }
}

// ==================== Language Table Tests ====================

#[test]
fn test_language_table_scenario() {
    let table = LanguageCodeTable::from_resource(&Resource::inline(
        "codes.txt",
        "Name\tCode\nGerman, Deutsch\tde\n",
    ))
    .expect("Should load");

    assert_eq!(table.from_language_code("de"), Some("German, Deutsch"));
    assert_eq!(table.from_language("German"), Some("de"));
    assert_eq!(table.from_language("Deutsch"), Some("de"));
    assert_eq!(table.num_languages(), 1);
}

#[test]
fn test_language_table_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("codes.txt");
    std::fs::write(&path, "Language\tCode\nSpanish, Castilian\tes\nFrench\tfr\n")
        .expect("Failed to write resource");

    let table = LanguageCodeTable::from_resource(&Resource::File(path)).expect("Should load");
    assert_eq!(table.from_language("Castilian"), Some("es"));
    assert_eq!(table.num_languages(), 2);
}

#[test]
fn test_name_to_code_then_translate() {
    let provider = JsonTranslator::new().expect("Should load");
    let table = LanguageCodeTable::new().expect("Should load");

    let code = table.from_language("Japanese").expect("Japanese should be known");
    assert_eq!(provider.translate("jpn", code), Some("日本"));

    let code = table.from_language("Dutch").expect("Dutch should be known");
    assert_eq!(provider.translate("nld", code), Some("Nederland"));
}

#[test]
fn test_every_sample_language_has_a_display_name() {
    let provider = JsonTranslator::new().expect("Should load");
    let table = LanguageCodeTable::new().expect("Should load");

    for country in provider.countries() {
        for language in provider.country_languages(&country) {
            assert!(
                table.from_language_code(&language).is_some(),
                "no display name for {language}"
            );
        }
    }
}

// ==================== Load Failure Tests ====================

#[test]
fn test_load_failures_name_the_resource() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join("broken.json"), "{not json").expect("write");
    std::fs::write(temp_dir.path().join("broken.txt"), "Header\nno tab here\n").expect("write");

    let err = JsonTranslator::from_name("broken.json", Some(temp_dir.path())).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.resource().ends_with("broken.json"));

    let err = LanguageCodeTable::from_name("broken.txt", Some(temp_dir.path())).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { line: 2, .. }));
    assert!(err.to_string().contains("broken.txt"));
}

#[test]
fn test_missing_resources_fail() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    assert!(matches!(
        JsonTranslator::from_name("absent.json", Some(temp_dir.path())),
        Err(LoadError::NotFound { .. })
    ));
    assert!(matches!(
        LanguageCodeTable::from_resource(&Resource::File(temp_dir.path().join("absent.txt"))),
        Err(LoadError::NotFound { .. })
    ));
}

// ==================== Property Tests ====================

fn language_code() -> impl Strategy<Value = String> {
    "[a-z]{2}".prop_filter("metadata field", |code| {
        !METADATA_FIELDS.contains(&code.as_str())
    })
}

fn country_data() -> impl Strategy<Value = BTreeMap<String, BTreeMap<String, String>>> {
    prop::collection::btree_map(
        "[a-z]{3}",
        prop::collection::btree_map(language_code(), "[A-Za-z][A-Za-z ]{0,15}", 1..6),
        0..8,
    )
}

fn language_rows() -> impl Strategy<Value = Vec<(Vec<String>, String)>> {
    prop::collection::vec(
        (
            prop::collection::vec("[A-Z][a-z]{1,8}", 1..4),
            "[a-z]{2}",
        ),
        0..12,
    )
}

proptest! {
    #[test]
    fn prop_loaded_countries_are_consistent(data in country_data()) {
        let resource = Resource::inline("generated.json", country_json(&data));
        let provider = JsonTranslator::from_resource(&resource).expect("Should load");

        let mut countries = provider.countries();
        countries.sort();
        prop_assert_eq!(countries, data.keys().cloned().collect::<Vec<_>>());

        for (country, names) in &data {
            let expected: Vec<String> = names.keys().cloned().collect();
            prop_assert_eq!(provider.country_languages(country), expected);
            for (language, name) in names {
                prop_assert_eq!(provider.translate(country, language), Some(name.as_str()));
            }
        }
    }

    #[test]
    fn prop_unknown_country_misses(
        data in country_data(),
        country in "[a-z]{3}",
        language in language_code(),
    ) {
        prop_assume!(!data.contains_key(&country));
        let resource = Resource::inline("generated.json", country_json(&data));
        let provider = JsonTranslator::from_resource(&resource).expect("Should load");

        prop_assert!(provider.country_languages(&country).is_empty());
        prop_assert_eq!(provider.translate(&country, &language), None);
    }

    #[test]
    fn prop_aliases_resolve_to_last_code(rows in language_rows()) {
        let mut text = String::from("Name\tCode\n");
        let mut expected_codes: HashMap<String, String> = HashMap::new();
        let mut expected_names: HashMap<String, String> = HashMap::new();
        for (aliases, code) in &rows {
            let names = aliases.join(", ");
            text.push_str(&format!("{names}\t{code}\n"));
            expected_codes.insert(code.clone(), names);
            for alias in aliases {
                expected_names.insert(alias.clone(), code.clone());
            }
        }

        let table = LanguageCodeTable::from_resource(&Resource::inline("generated.txt", text))
            .expect("Should load");

        prop_assert_eq!(table.num_languages(), expected_codes.len());
        for (code, names) in &expected_codes {
            prop_assert_eq!(table.from_language_code(code), Some(names.as_str()));
        }
        for (alias, code) in &expected_names {
            prop_assert_eq!(table.from_language(alias), Some(code.as_str()));
        }
    }
}
