use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::locale::Locale;
use crate::translation::fields::FieldStrategy;

/// Application configuration module
/// This module handles loading and validating the batch settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Locale the articles are written in
    #[serde(default = "default_source_locale")]
    pub source_locale: Locale,

    /// Locales to produce, in processing order
    #[serde(default = "default_target_locales")]
    pub target_locales: Vec<Locale>,

    /// Directory holding one sub-directory per locale
    #[serde(default = "default_content_root")]
    pub content_root: PathBuf,

    /// Extension of article files, without the dot
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Frontmatter field that carries the article locale
    #[serde(default = "default_locale_field")]
    pub locale_field: String,

    /// Frontmatter field that links the language variants of an article
    #[serde(default = "default_canonical_field")]
    pub canonical_field: String,

    /// Terms that are never sent for translation
    #[serde(default = "default_verbatim_terms")]
    pub verbatim_terms: Vec<String>,

    /// Per-field strategy overrides, merged over the built-in table
    #[serde(default)]
    pub fields: HashMap<String, FieldStrategy>,

    /// Translation API settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation API settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// API base URL; derived from the key type when absent
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Hard per-request size limit of the API, in characters
    #[serde(default = "default_max_chars_per_request")]
    pub max_chars_per_request: usize,

    /// Chunk size used once a text reaches the request limit
    #[serde(default = "default_chunk_chars")]
    pub chunk_chars: usize,

    /// Delay after each chunk request, in milliseconds
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Delay between the target locales of one document
    #[serde(default = "default_locale_delay_ms")]
    pub locale_delay_ms: u64,

    /// Delay after each document
    #[serde(default = "default_document_delay_ms")]
    pub document_delay_ms: u64,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            max_chars_per_request: default_max_chars_per_request(),
            chunk_chars: default_chunk_chars(),
            request_delay_ms: default_request_delay_ms(),
            locale_delay_ms: default_locale_delay_ms(),
            document_delay_ms: default_document_delay_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TranslationConfig {
    /// Settings with every delay disabled
    pub fn without_delays(mut self) -> Self {
        self.request_delay_ms = 0;
        self.locale_delay_ms = 0;
        self.document_delay_ms = 0;
        self
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_locale() -> Locale {
    Locale::Pt
}

fn default_target_locales() -> Vec<Locale> {
    vec![Locale::En, Locale::Es]
}

fn default_content_root() -> PathBuf {
    PathBuf::from("src/content/blog")
}

fn default_file_extension() -> String {
    "mdx".to_string()
}

fn default_locale_field() -> String {
    "locale".to_string()
}

fn default_canonical_field() -> String {
    "canonicalSlug".to_string()
}

fn default_verbatim_terms() -> Vec<String> {
    vec![
        "Face Moderna".to_string(),
        "Dr. Robério Brandão".to_string(),
        "Endomidface".to_string(),
    ]
}

fn default_max_chars_per_request() -> usize {
    50_000
}

fn default_chunk_chars() -> usize {
    45_000 // headroom under the request limit
}

fn default_request_delay_ms() -> u64 {
    100
}

fn default_locale_delay_ms() -> u64 {
    500
}

fn default_document_delay_ms() -> u64 {
    1000
}

fn default_timeout_secs() -> u64 {
    60
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_locale: default_source_locale(),
            target_locales: default_target_locales(),
            content_root: default_content_root(),
            file_extension: default_file_extension(),
            locale_field: default_locale_field(),
            canonical_field: default_canonical_field(),
            verbatim_terms: default_verbatim_terms(),
            fields: HashMap::new(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Default location of the optional configuration file
    pub const DEFAULT_PATH: &'static str = "blog-translate.json";

    /// Load the configuration from `path`, falling back to defaults when the file is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        self.source_locale.language_name()?;
        for locale in &self.target_locales {
            locale.language_name()?;
        }

        if self.target_locales.is_empty() {
            return Err(anyhow!("At least one target locale is required"));
        }
        if self.target_locales.contains(&self.source_locale) {
            return Err(anyhow!(
                "Target locales must not include the source locale '{}'",
                self.source_locale
            ));
        }
        let unique: HashSet<_> = self.target_locales.iter().collect();
        if unique.len() != self.target_locales.len() {
            return Err(anyhow!("Target locales must not repeat"));
        }

        let translation = &self.translation;
        if translation.chunk_chars == 0 {
            return Err(anyhow!("chunk_chars must be greater than zero"));
        }
        if translation.chunk_chars >= translation.max_chars_per_request {
            return Err(anyhow!(
                "chunk_chars ({}) must be below max_chars_per_request ({})",
                translation.chunk_chars,
                translation.max_chars_per_request
            ));
        }

        if self.file_extension.trim_start_matches('.').is_empty() {
            return Err(anyhow!("file_extension must not be empty"));
        }

        Ok(())
    }

    /// Directory holding the articles of `locale`
    pub fn locale_dir(&self, locale: Locale) -> PathBuf {
        self.content_root.join(locale.code())
    }

    /// Directory holding the source articles
    pub fn source_dir(&self) -> PathBuf {
        self.locale_dir(self.source_locale)
    }

    /// File extension without a leading dot
    pub fn extension(&self) -> &str {
        self.file_extension.trim_start_matches('.')
    }
}
