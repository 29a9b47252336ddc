/*!
 * Frontmatter field translation.
 *
 * Each metadata field is handled according to a `FieldStrategy` looked up in a
 * `FieldTable`. The table is plain data: the built-in entries cover the blog's
 * known fields and configuration may add or override entries. Fields without
 * an entry are copied verbatim.
 */

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::collections::{HashMap, HashSet};

use super::core::TranslationService;
use super::links::LinkRewriter;
use crate::app_config::Config;
use crate::errors::TranslationError;
use crate::locale::Locale;

static VERBATIM: FieldStrategy = FieldStrategy::Verbatim;

/// How a metadata field is produced in the target locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldStrategy {
    /// Copied unchanged
    Verbatim,

    /// Replaced by the target locale code
    LocaleMarker,

    /// A single string that is translated
    Scalar,

    /// A list whose string elements are translated one by one
    ElementWise,

    /// A list of mappings whose named string sub-fields are translated
    Structured { translatable: Vec<String> },

    /// An image path, or a mapping whose `src` is rewritten and other keys copied
    Asset,

    /// Identifier shared by every language variant; copied unchanged
    CanonicalId,
}

/// Field name to strategy lookup
#[derive(Debug, Clone)]
pub struct FieldTable {
    strategies: HashMap<String, FieldStrategy>,
    locale_field: String,
}

impl FieldTable {
    /// Entries for the blog's known frontmatter fields
    pub fn builtin(locale_field: &str, canonical_field: &str) -> Self {
        let mut strategies = HashMap::new();
        strategies.insert(locale_field.to_string(), FieldStrategy::LocaleMarker);
        strategies.insert("title".to_string(), FieldStrategy::Scalar);
        strategies.insert("description".to_string(), FieldStrategy::Scalar);
        strategies.insert("keywords".to_string(), FieldStrategy::ElementWise);
        strategies.insert(
            "faq".to_string(),
            FieldStrategy::Structured {
                translatable: vec!["question".to_string(), "answer".to_string()],
            },
        );
        strategies.insert("image".to_string(), FieldStrategy::Asset);
        strategies.insert(canonical_field.to_string(), FieldStrategy::CanonicalId);

        Self {
            strategies,
            locale_field: locale_field.to_string(),
        }
    }

    /// Built-in table with the configured overrides applied
    pub fn from_config(config: &Config) -> Self {
        let mut table = Self::builtin(&config.locale_field, &config.canonical_field);
        for (name, strategy) in &config.fields {
            table.set(name, strategy.clone());
        }
        table
    }

    pub fn set(&mut self, name: &str, strategy: FieldStrategy) {
        self.strategies.insert(name.to_string(), strategy);
    }

    /// Strategy for `name`; unknown fields are verbatim
    pub fn strategy(&self, name: &str) -> &FieldStrategy {
        self.strategies.get(name).unwrap_or(&VERBATIM)
    }

    pub fn locale_field(&self) -> &str {
        &self.locale_field
    }
}

/// Translates a metadata mapping field by field
#[derive(Debug, Clone)]
pub struct FieldTranslator {
    table: FieldTable,
    verbatim_terms: HashSet<String>,
}

impl FieldTranslator {
    pub fn new<I, S>(table: FieldTable, verbatim_terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table,
            verbatim_terms: verbatim_terms
                .into_iter()
                .map(|term| term.into().trim().to_string())
                .collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(FieldTable::from_config(config), config.verbatim_terms.iter().cloned())
    }

    /// Whether `text` is one of the terms that are never translated
    pub fn is_verbatim_term(&self, text: &str) -> bool {
        self.verbatim_terms.contains(text.trim())
    }

    /// Produce the metadata of the `target` variant, keeping field order
    pub async fn translate_metadata(
        &self,
        service: &TranslationService,
        metadata: &Mapping,
        target: Locale,
    ) -> Result<Mapping, TranslationError> {
        let rewriter = LinkRewriter::new(service.source_locale(), target);
        let mut output = Mapping::with_capacity(metadata.len() + 1);

        for (key, value) in metadata {
            let strategy = key
                .as_str()
                .map(|name| self.table.strategy(name))
                .unwrap_or(&VERBATIM);

            let translated = match strategy {
                FieldStrategy::Verbatim | FieldStrategy::CanonicalId => value.clone(),
                FieldStrategy::LocaleMarker => Value::from(target.code()),
                FieldStrategy::Scalar => self.translate_value(service, value, target).await?,
                FieldStrategy::ElementWise => self.translate_elements(service, value, target).await?,
                FieldStrategy::Structured { translatable } => {
                    self.translate_entries(service, value, translatable, target).await?
                }
                FieldStrategy::Asset => Self::rewrite_asset(&rewriter, value),
            };
            output.insert(key.clone(), translated);
        }

        let locale_field = self.table.locale_field();
        if !output.contains_key(locale_field) {
            output.insert(Value::from(locale_field), Value::from(target.code()));
        }

        Ok(output)
    }

    /// Translate a string value; other values are copied
    async fn translate_value(
        &self,
        service: &TranslationService,
        value: &Value,
        target: Locale,
    ) -> Result<Value, TranslationError> {
        match value {
            Value::String(text) if !self.is_verbatim_term(text) => {
                Ok(Value::String(service.translate(text, target).await?))
            }
            other => Ok(other.clone()),
        }
    }

    async fn translate_elements(
        &self,
        service: &TranslationService,
        value: &Value,
        target: Locale,
    ) -> Result<Value, TranslationError> {
        let Value::Sequence(items) = value else {
            return Ok(value.clone());
        };

        let mut translated = Vec::with_capacity(items.len());
        for item in items {
            translated.push(self.translate_value(service, item, target).await?);
        }
        Ok(Value::Sequence(translated))
    }

    async fn translate_entries(
        &self,
        service: &TranslationService,
        value: &Value,
        translatable: &[String],
        target: Locale,
    ) -> Result<Value, TranslationError> {
        let Value::Sequence(entries) = value else {
            return Ok(value.clone());
        };

        let mut translated = Vec::with_capacity(entries.len());
        for entry in entries {
            let Value::Mapping(fields) = entry else {
                translated.push(entry.clone());
                continue;
            };
            if !translatable.iter().all(|name| fields.contains_key(name.as_str())) {
                translated.push(entry.clone());
                continue;
            }

            let mut out = Mapping::with_capacity(fields.len());
            for (key, sub_value) in fields {
                let wanted = key
                    .as_str()
                    .is_some_and(|name| translatable.iter().any(|t| t == name));
                let sub_value = if wanted {
                    self.translate_value(service, sub_value, target).await?
                } else {
                    sub_value.clone()
                };
                out.insert(key.clone(), sub_value);
            }
            translated.push(Value::Mapping(out));
        }
        Ok(Value::Sequence(translated))
    }

    /// Move an image path to the target locale; mapping keys other than `src` are copied
    fn rewrite_asset(rewriter: &LinkRewriter, value: &Value) -> Value {
        match value {
            Value::String(path) => Value::String(rewriter.rewrite_asset_path(path)),
            Value::Mapping(fields) => {
                let mut out = Mapping::with_capacity(fields.len());
                for (key, sub_value) in fields {
                    let sub_value = match (key.as_str(), sub_value) {
                        (Some("src"), Value::String(path)) => {
                            Value::String(rewriter.rewrite_asset_path(path))
                        }
                        _ => sub_value.clone(),
                    };
                    out.insert(key.clone(), sub_value);
                }
                Value::Mapping(out)
            }
            other => other.clone(),
        }
    }
}
