/*!
 * Tests for configuration loading and validation
 */

use anyhow::Result;
use blog_translate::app_config::{Config, LogLevel};
use blog_translate::locale::Locale;
use blog_translate::translation::FieldStrategy;
use crate::common;

/// Test that a config file overrides only the fields it names
#[test]
fn test_load_or_default_withPartialFile_shouldMergeDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "blog-translate.json",
        r#"{
            "target_locales": ["es"],
            "log_level": "debug",
            "verbatim_terms": ["Clínica Face"],
            "fields": { "summary": { "kind": "scalar" } },
            "translation": { "locale_delay_ms": 0 }
        }"#,
    )?;

    let config = Config::load_or_default(&path)?;

    assert_eq!(config.source_locale, Locale::Pt);
    assert_eq!(config.target_locales, vec![Locale::Es]);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.verbatim_terms, vec!["Clínica Face"]);
    assert_eq!(config.fields.get("summary"), Some(&FieldStrategy::Scalar));
    assert_eq!(config.translation.locale_delay_ms, 0);
    assert_eq!(config.translation.document_delay_ms, 1000);
    assert!(config.validate().is_ok());

    Ok(())
}

/// Test that a malformed config file is reported instead of silently defaulted
#[test]
fn test_load_or_default_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "blog-translate.json", "{ not json")?;

    assert!(Config::load_or_default(&path).is_err());

    Ok(())
}

/// Test that a missing config file never gets created
#[test]
fn test_load_or_default_withMissingFile_shouldNotWriteFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("blog-translate.json");

    let config = Config::load_or_default(&path)?;

    assert_eq!(config.target_locales, vec![Locale::En, Locale::Es]);
    assert!(!path.exists());

    Ok(())
}

/// Test the locale directory layout
#[test]
fn test_locale_dir_shouldNestUnderContentRoot() {
    let config = common::test_config(std::path::Path::new("/site/blog"));
    assert_eq!(config.locale_dir(Locale::Es), std::path::PathBuf::from("/site/blog/es"));
    assert_eq!(config.source_dir(), std::path::PathBuf::from("/site/blog/pt"));
}

/// Test that an empty target list is rejected
#[test]
fn test_validate_withNoTargets_shouldFail() {
    let mut config = Config::default();
    config.target_locales.clear();
    assert!(config.validate().is_err());
}
